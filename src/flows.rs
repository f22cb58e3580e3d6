//! User Action Flows
//!
//! The request sequences behind form submission, deletion and the review
//! summary, written against `Backend` so they run without a browser.

use crate::api::{ActivityQuery, Backend};
use crate::error::{ApiError, ApiResult};
use crate::form::ActivityDraft;
use crate::models::Activity;
use crate::notify::Notice;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    Deleted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    /// No activity carries an AI summary; the review request was not sent
    NothingToSummarize,
    Generated(String),
    /// The review endpoint answered with an error message
    Rejected(String),
}

/// Create an activity from the form
pub async fn submit_activity<B: Backend + ?Sized>(
    backend: &B,
    draft: &ActivityDraft,
    ai_summary: Option<&str>,
    today: &str,
) -> ApiResult<()> {
    let activity = draft.to_new_activity(ai_summary, today);
    backend.create_activity(&activity).await?;
    log::info!("Created activity '{}'", activity.title);
    Ok(())
}

/// Delete after the user confirms
pub async fn delete_activity<B, F>(backend: &B, id: u32, confirm: F) -> ApiResult<DeleteOutcome>
where
    B: Backend + ?Sized,
    F: FnOnce() -> bool,
{
    if !confirm() {
        log::debug!("Delete of activity {} cancelled", id);
        return Ok(DeleteOutcome::Cancelled);
    }
    backend.delete_activity(id).await?;
    log::info!("Deleted activity {}", id);
    Ok(DeleteOutcome::Deleted)
}

/// Activities eligible for the review summary
pub fn summarized_activities(activities: &[Activity]) -> Vec<Activity> {
    activities
        .iter()
        .filter(|activity| activity.has_summary())
        .cloned()
        .collect()
}

/// Fetch every activity and synthesize a review over those with summaries
pub async fn generate_review<B: Backend + ?Sized>(backend: &B) -> ApiResult<ReviewOutcome> {
    let activities = backend.list_activities(&ActivityQuery::all()).await?;
    let eligible = summarized_activities(&activities);
    if eligible.is_empty() {
        return Ok(ReviewOutcome::NothingToSummarize);
    }
    log::info!(
        "Generating review summary from {} of {} activities",
        eligible.len(),
        activities.len()
    );
    match backend.generate_review_summary(&eligible).await {
        Ok(summary) => Ok(ReviewOutcome::Generated(summary)),
        Err(ApiError::Status { message, .. }) => Ok(ReviewOutcome::Rejected(message)),
        Err(err) => Err(err),
    }
}

/// Toast for a finished review request. Failures before the review request
/// itself (list fetch, transport) get the generic message.
pub fn review_notice(result: &ApiResult<ReviewOutcome>) -> Notice {
    match result {
        Ok(ReviewOutcome::NothingToSummarize) => Notice::error("No activities with AI summaries found"),
        Ok(ReviewOutcome::Generated(_)) => Notice::success("Performance review summary generated!"),
        Ok(ReviewOutcome::Rejected(message)) => Notice::error(message.clone()),
        Err(_) => Notice::error("Error generating summary"),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Call, MockBackend};
    use super::*;
    use crate::error::ApiError;
    use crate::view_model::{ActivityCardView, ActivityListView};
    use futures::executor::block_on;

    fn make_activity(id: u32, title: &str, ai_summary: &str) -> Activity {
        Activity {
            id,
            title: title.to_string(),
            description: "desc".to_string(),
            category: "Mentoring".to_string(),
            ai_summary: ai_summary.to_string(),
            date: "2025-02-10".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_create_then_reload_shows_card() {
        let backend = MockBackend::default();
        let draft = ActivityDraft {
            title: "Run".into(),
            description: "5k".into(),
            category: "Fitness".into(),
            tags: "cardio".into(),
            date: "2025-03-01".into(),
        };

        block_on(submit_activity(&backend, &draft, None, "2025-03-01")).unwrap();
        let activities = block_on(backend.list_activities(&ActivityQuery::all())).unwrap();

        let cards = match ActivityListView::build(&activities) {
            ActivityListView::Cards(cards) => cards,
            other => panic!("expected cards, got {:?}", other),
        };
        assert_eq!(cards.len(), 1);
        let card: &ActivityCardView = &cards[0];
        assert_eq!(card.title, "Run");
        assert_eq!(card.tags, vec!["#cardio"]);
        assert_eq!(card.category, "Fitness");
    }

    #[test]
    fn test_submit_failure_is_reported() {
        let backend = MockBackend::failing(ApiError::status(500, "Failed to create activity"));
        let draft = ActivityDraft::new("2025-03-01");
        let err = block_on(submit_activity(&backend, &draft, None, "2025-03-01")).unwrap_err();
        assert_eq!(err, ApiError::status(500, "Failed to create activity"));
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let backend = MockBackend::with_activities(vec![make_activity(1, "Talk", "")]);

        let outcome = block_on(delete_activity(&backend, 1, || false)).unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(backend.calls().is_empty());
        assert_eq!(backend.activities.borrow().len(), 1);
    }

    #[test]
    fn test_confirmed_delete_removes_activity() {
        let backend = MockBackend::with_activities(vec![
            make_activity(1, "Talk", ""),
            make_activity(2, "Blog", ""),
        ]);

        let outcome = block_on(delete_activity(&backend, 1, || true)).unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(backend.calls(), vec![Call::Delete(1)]);
        let remaining: Vec<u32> = backend.activities.borrow().iter().map(|a| a.id).collect();
        assert_eq!(remaining, vec![2]);
    }

    #[test]
    fn test_review_skipped_without_summaries() {
        let backend = MockBackend::with_activities(vec![
            make_activity(1, "Talk", ""),
            make_activity(2, "Blog", ""),
        ]);

        let result = block_on(generate_review(&backend));

        assert_eq!(result, Ok(ReviewOutcome::NothingToSummarize));
        assert_eq!(backend.calls(), vec![Call::ListActivities(ActivityQuery::all())]);
        assert_eq!(
            review_notice(&result),
            Notice::error("No activities with AI summaries found")
        );
    }

    #[test]
    fn test_whitespace_summary_is_eligible() {
        let backend = MockBackend::with_activities(vec![make_activity(4, "Meetup", " ")]);

        let outcome = block_on(generate_review(&backend)).unwrap();

        assert_eq!(outcome, ReviewOutcome::Generated("Review of 1 activities".into()));
        assert_eq!(summarized_activities(&backend.activities.borrow()).len(), 1);
    }

    #[test]
    fn test_review_sends_only_summarized_activities() {
        let backend = MockBackend::with_activities(vec![
            make_activity(1, "Talk", "Reached 300 developers."),
            make_activity(2, "Blog", ""),
            make_activity(3, "Workshop", "Trained 40 engineers."),
        ]);

        let outcome = block_on(generate_review(&backend)).unwrap();

        assert_eq!(outcome, ReviewOutcome::Generated("Review of 2 activities".into()));
        assert_eq!(
            backend.calls(),
            vec![
                Call::ListActivities(ActivityQuery::all()),
                Call::Review(vec![1, 3]),
            ]
        );
    }

    #[test]
    fn test_review_propagates_list_failure() {
        let backend = MockBackend::failing(ApiError::Network("offline".into()));
        let err = block_on(generate_review(&backend)).unwrap_err();
        assert_eq!(err, ApiError::Network("offline".into()));
    }

    #[test]
    fn test_list_status_error_gets_generic_notice() {
        let backend = MockBackend::failing(ApiError::status(500, "Failed to load activities"));

        let result = block_on(generate_review(&backend));

        assert!(result.is_err());
        assert_eq!(review_notice(&result), Notice::error("Error generating summary"));
    }

    #[test]
    fn test_review_rejection_forwards_server_message() {
        let backend = MockBackend::failing_on(
            ApiError::status(500, "AI service may not be available."),
            |call| matches!(call, Call::Review(_)),
        );
        backend
            .activities
            .borrow_mut()
            .push(make_activity(1, "Talk", "Reached 300 developers."));

        let result = block_on(generate_review(&backend));

        assert_eq!(
            result,
            Ok(ReviewOutcome::Rejected("AI service may not be available.".into()))
        );
        assert_eq!(
            review_notice(&result),
            Notice::error("AI service may not be available.")
        );
    }

    #[test]
    fn test_generated_review_notice() {
        let result = Ok(ReviewOutcome::Generated("Summary".into()));
        assert_eq!(
            review_notice(&result),
            Notice::success("Performance review summary generated!")
        );
    }
}
