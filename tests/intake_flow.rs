//! Integration tests for the intake conversation.
//!
//! These drive full sessions through the application handlers with the
//! LLM-backed question generator sitting on the mock AI provider:
//! 1. The canonical seven-answer flow ends with generated questions
//! 2. Exit keywords end the session at any stage
//! 3. A failing technology yields an apology without hiding the others
//! 4. Ended sessions refuse further input

use std::sync::Arc;

use talent_scout::adapters::{InMemorySessionStore, LlmQuestionGenerator, MockAIProvider};
use talent_scout::adapters::ai::MockError;
use talent_scout::application::handlers::intake::{
    EndIntakeCommand, EndIntakeHandler, GetIntakeSessionHandler, GetIntakeSessionQuery,
    StartIntakeCommand, StartIntakeHandler, SubmitTurnCommand, SubmitTurnHandler,
    SubmitTurnResult,
};
use talent_scout::domain::foundation::SessionId;
use talent_scout::domain::intake::{
    prompts, GenerationOutcome, GenerationSettings, IntakeEngine, IntakeError, SessionStatus,
    TurnOutcome, TurnRole,
};
use talent_scout::ports::SessionStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    provider: MockAIProvider,
    start: StartIntakeHandler,
    submit: SubmitTurnHandler,
    get: GetIntakeSessionHandler,
    end: EndIntakeHandler,
}

impl Harness {
    fn new(provider: MockAIProvider) -> Self {
        Self::with_settings(provider, GenerationSettings::default())
    }

    fn with_settings(provider: MockAIProvider, settings: GenerationSettings) -> Self {
        let generator = LlmQuestionGenerator::new(Arc::new(provider.clone()));
        let engine = Arc::new(
            IntakeEngine::canonical(Arc::new(generator)).with_generation_settings(settings),
        );
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

        Self {
            provider,
            start: StartIntakeHandler::new(engine.clone(), store.clone()),
            submit: SubmitTurnHandler::new(engine, store.clone()),
            get: GetIntakeSessionHandler::new(store.clone()),
            end: EndIntakeHandler::new(store),
        }
    }

    async fn start(&self) -> SessionId {
        self.start
            .handle(StartIntakeCommand)
            .await
            .expect("session starts")
            .session
            .id()
    }

    async fn say(&self, session_id: SessionId, text: &str) -> SubmitTurnResult {
        self.submit
            .handle(SubmitTurnCommand {
                session_id,
                text: text.to_string(),
            })
            .await
            .expect("turn applies")
    }

    async fn answer_up_to_tech_stack(&self, session_id: SessionId) {
        for text in [
            "Jane Doe",
            "jane@x.com",
            "98765 43210",
            "3",
            "Backend Engineer",
            "Pune",
        ] {
            let result = self.say(session_id, text).await;
            assert_eq!(result.outcome, TurnOutcome::Advanced, "answer {text:?}");
        }
    }
}

// =============================================================================
// Full flow
// =============================================================================

#[tokio::test]
async fn canonical_flow_completes_with_questions_per_technology() {
    let provider = MockAIProvider::new()
        .with_response("1. What is the GIL?")
        .with_response("1. What is a goroutine?");
    let harness = Harness::with_settings(
        provider,
        GenerationSettings {
            concurrent: false,
            ..Default::default()
        },
    );
    let id = harness.start().await;

    harness.answer_up_to_tech_stack(id).await;
    let result = harness.say(id, "Python, Go").await;

    assert_eq!(result.outcome, TurnOutcome::Completed);
    let replies: Vec<&str> = result.replies.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(
        replies,
        [
            "1. What is the GIL?",
            "1. What is a goroutine?",
            prompts::CLOSING_MESSAGE
        ]
    );

    let session = result.session;
    assert_eq!(session.status(), SessionStatus::Completed);
    let record = session.record();
    assert_eq!(record.name.as_deref(), Some("Jane Doe"));
    assert_eq!(record.email.as_deref(), Some("jane@x.com"));
    assert_eq!(record.phone.as_deref(), Some("98765 43210"));
    assert_eq!(record.experience.as_deref(), Some("3"));
    assert_eq!(record.position.as_deref(), Some("Backend Engineer"));
    assert_eq!(record.location.as_deref(), Some("Pune"));
    assert_eq!(record.technologies(), ["Python", "Go"]);
    assert_eq!(session.question_sets().len(), 2);
}

#[tokio::test]
async fn generation_prompts_carry_technology_and_experience() {
    let harness = Harness::new(MockAIProvider::new());
    let id = harness.start().await;

    harness.answer_up_to_tech_stack(id).await;
    harness.say(id, "Rust").await;

    let calls = harness.provider.get_calls();
    assert_eq!(calls.len(), 1);
    let prompt = &calls[0].messages[0].content;
    assert!(prompt.contains("about Rust"));
    assert!(prompt.contains("3 years of experience"));
}

#[tokio::test]
async fn transcript_alternates_assistant_and_user_turns() {
    let harness = Harness::new(MockAIProvider::new());
    let id = harness.start().await;

    harness.say(id, "Jane Doe").await;
    harness.say(id, "not-an-email").await;

    let session = harness
        .get
        .handle(GetIntakeSessionQuery { session_id: id })
        .await
        .unwrap();
    let turns = session.transcript().turns();
    let roles: Vec<TurnRole> = turns.iter().map(|t| t.role).collect();

    assert_eq!(
        roles,
        [
            TurnRole::Assistant,
            TurnRole::User,
            TurnRole::Assistant,
            TurnRole::User,
            TurnRole::Assistant
        ]
    );
    assert_eq!(turns[0].content, prompts::GREETING);
    assert_eq!(turns[4].content, prompts::EMAIL_REJECTION);
    assert_eq!(session.current_stage_index(), 1);
}

// =============================================================================
// Rejections and exits
// =============================================================================

#[tokio::test]
async fn rejected_answer_keeps_stage_until_valid() {
    let harness = Harness::new(MockAIProvider::new());
    let id = harness.start().await;
    harness.say(id, "Jane Doe").await;

    let rejected = harness.say(id, "jane at x dot com").await;
    assert_eq!(rejected.outcome, TurnOutcome::Rejected);
    assert!(rejected.session.record().email.is_none());

    let accepted = harness.say(id, "  jane@x.com  ").await;
    assert_eq!(accepted.outcome, TurnOutcome::Advanced);
    assert_eq!(accepted.session.record().email.as_deref(), Some("jane@x.com"));
    assert_eq!(accepted.replies[0].content, prompts::PHONE_PROMPT);
}

#[tokio::test]
async fn quitting_mid_flow_terminates_and_keeps_partial_record() {
    let harness = Harness::new(MockAIProvider::new());
    let id = harness.start().await;
    harness.say(id, "Jane Doe").await;
    harness.say(id, "jane@x.com").await;

    let result = harness.say(id, "Actually I want to quit").await;

    assert_eq!(result.outcome, TurnOutcome::Terminated);
    assert_eq!(result.replies[0].content, prompts::FAREWELL_MESSAGE);
    assert_eq!(result.session.status(), SessionStatus::TerminatedByUser);
    assert_eq!(result.session.record().email.as_deref(), Some("jane@x.com"));
    assert!(result.session.record().phone.is_none());
    assert_eq!(harness.provider.call_count(), 0);
}

#[tokio::test]
async fn exit_keyword_wins_over_validation() {
    let harness = Harness::new(MockAIProvider::new());
    let id = harness.start().await;
    harness.say(id, "Jane Doe").await;

    let result = harness.say(id, "bye").await;

    assert_eq!(result.outcome, TurnOutcome::Terminated);
}

// =============================================================================
// Generation failures
// =============================================================================

#[tokio::test]
async fn failing_technology_gets_apology_while_others_succeed() {
    let provider = MockAIProvider::new().with_error_for(
        "about Go suitable",
        MockError::Unavailable {
            message: "model overloaded".to_string(),
        },
    );
    let harness = Harness::new(provider);
    let id = harness.start().await;
    harness.answer_up_to_tech_stack(id).await;

    let result = harness.say(id, "Python / Go / SQL").await;

    assert_eq!(result.outcome, TurnOutcome::Completed);
    assert_eq!(result.replies.len(), 4);
    assert_eq!(result.replies[1].content, prompts::generation_apology("Go"));
    assert!(!result.replies[1].content.contains("overloaded"));
    assert_eq!(result.replies[3].content, prompts::CLOSING_MESSAGE);

    let sets = result.session.question_sets();
    let technologies: Vec<&str> = sets.iter().map(|s| s.technology.as_str()).collect();
    assert_eq!(technologies, ["Python", "Go", "SQL"]);
    assert!(sets[0].is_generated());
    assert!(matches!(sets[1].outcome, GenerationOutcome::Failed { .. }));
    assert!(sets[2].is_generated());
}

#[tokio::test]
async fn empty_completion_counts_as_failure() {
    let harness = Harness::new(MockAIProvider::new().with_response("   "));
    let id = harness.start().await;
    harness.answer_up_to_tech_stack(id).await;

    let result = harness.say(id, "Kotlin").await;

    assert_eq!(result.outcome, TurnOutcome::Completed);
    assert_eq!(result.replies[0].content, prompts::generation_apology("Kotlin"));
    assert_eq!(result.session.status(), SessionStatus::Completed);
}

// =============================================================================
// Ended sessions
// =============================================================================

#[tokio::test]
async fn completed_session_refuses_further_input() {
    let harness = Harness::new(MockAIProvider::new());
    let id = harness.start().await;
    harness.answer_up_to_tech_stack(id).await;
    harness.say(id, "Rust").await;
    let calls_after_completion = harness.provider.call_count();

    let before = harness
        .get
        .handle(GetIntakeSessionQuery { session_id: id })
        .await
        .unwrap();
    let result = harness.say(id, "One more thing").await;

    assert_eq!(result.outcome, TurnOutcome::AlreadyEnded);
    assert_eq!(result.replies[0].content, prompts::SESSION_ENDED_MESSAGE);
    assert_eq!(result.session.transcript().len(), before.transcript().len());
    assert_eq!(result.session.record(), before.record());
    assert_eq!(harness.provider.call_count(), calls_after_completion);
}

#[tokio::test]
async fn ended_session_is_gone_after_discard() {
    let harness = Harness::new(MockAIProvider::new());
    let id = harness.start().await;

    harness
        .end
        .handle(EndIntakeCommand { session_id: id })
        .await
        .unwrap();

    let err = harness
        .submit
        .handle(SubmitTurnCommand {
            session_id: id,
            text: "Jane".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, IntakeError::NotFound(id));
}
