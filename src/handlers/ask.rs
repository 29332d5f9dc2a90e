use super::{
    ASK_FAILED_MARKUP, EMPTY_QUESTION_MARKUP, LOADING_MARKUP,
    fsm::{AskEvent, AskState, AskStateMachine},
};
use crate::{
    api::DocumentApi,
    markup,
    page::{Content, Control, Page, Region},
};
use tracing::{error, info};

fn advance(machine: &mut AskStateMachine, event: AskEvent) {
    if let Err(e) = machine.transition(event) {
        error!("Ask flow out of order: {}", e);
    }
}

/// Sends the current question to the ask endpoint and renders the answer.
/// Every path that reads a question ends by writing to the answer region.
pub async fn ask_question(page: &dyn Page, api: &dyn DocumentApi) -> AskState {
    let mut machine = AskStateMachine::new();
    advance(&mut machine, AskEvent::Submit);

    let question = page
        .read_value(Control::QuestionInput)
        .await
        .unwrap_or_default();

    if question.is_empty() {
        advance(&mut machine, AskEvent::EmptyInput);
        page.write(
            Region::AnswerText,
            Content::Markup(EMPTY_QUESTION_MARKUP.to_string()),
        )
        .await;
        return machine.current_state();
    }

    advance(&mut machine, AskEvent::InputAccepted);
    page.write(Region::AnswerText, Content::Markup(LOADING_MARKUP.to_string()))
        .await;

    match api.ask(&question).await {
        Ok(response) => {
            info!("Answer received (source: {:?})", response.source);
            let rendered = markup::render_answer(response.answer_or_fallback());
            advance(&mut machine, AskEvent::AnswerReceived);
            page.write(Region::AnswerText, Content::Markup(rendered)).await;
        }
        Err(e) => {
            error!("Error: {}", e);
            advance(&mut machine, AskEvent::RequestFailed);
            page.write(
                Region::AnswerText,
                Content::Markup(ASK_FAILED_MARKUP.to_string()),
            )
            .await;
        }
    }

    machine.current_state()
}
