mod answer_doh_query;

pub use answer_doh_query::AnswerDohQueryUseCase;
