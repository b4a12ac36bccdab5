use abuse_dns_application::AnswerDohQueryUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub answer_query: Arc<AnswerDohQueryUseCase>,
}
