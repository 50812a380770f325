use taskwell_core::draft::TaskDraft;
use taskwell_core::feed::{FeedAction, FeedPhase, TaskFeed};
use taskwell_core::protocol::{classify, ApiOutcome, TaskPage};
use taskwell_core::task::{Task, TaskStatus};

fn task(id: i64, title: &str) -> Task {
    Task {
        task_id: id,
        task_title: title.to_string(),
        task_description: String::new(),
        task_status: TaskStatus::Pending,
        task_due_date: None,
    }
}

#[test]
fn dashboard_flow_from_first_page_to_exhaustion() {
    let mut feed = TaskFeed::new();

    // Scenario A: the first page arrives with two tasks out of two pages.
    feed.apply(FeedAction::Restart);
    let first = feed.in_flight().cloned().expect("initial fetch queued");
    assert_eq!(first.page, 1);
    assert!(first.reset);
    assert_eq!(first.list_args().form_params()[1], ("skip", "1".to_string()));

    feed.apply(FeedAction::Finished {
        ticket: first,
        result: Ok(TaskPage {
            task_list: vec![task(1, "Draft report"), task(2, "Send invoices")],
            total_pages: 2,
            total_records: 3,
        }),
    });
    assert_eq!(feed.tasks().len(), 2);
    assert_eq!(feed.phase(), FeedPhase::HasMore);

    // Scenario B: the scroll-triggered page yields nothing new.
    feed.apply(FeedAction::ScrolledToBottom);
    let second = feed.in_flight().cloned().expect("page 2 queued");
    assert_eq!(second.page, 2);
    feed.apply(FeedAction::Finished {
        ticket: second,
        result: Ok(TaskPage {
            task_list: vec![],
            total_pages: 2,
            total_records: 3,
        }),
    });
    assert!(feed.is_exhausted());

    feed.apply(FeedAction::ScrolledToBottom);
    assert!(feed.in_flight().is_none());

    // Scenario F: a successful delete removes locally, without a refetch.
    feed.apply(FeedAction::TaskRemoved(2));
    assert_eq!(feed.tasks().len(), 1);
    assert!(feed.in_flight().is_none());
}

#[test]
fn search_change_mid_flight_wins_over_the_stale_response() {
    let mut feed = TaskFeed::new();
    feed.apply(FeedAction::Restart);
    let stale = feed.in_flight().cloned().expect("initial fetch queued");

    feed.apply(FeedAction::SearchChanged("invoice".to_string()));
    let fresh = feed.in_flight().cloned().expect("reset fetch queued");
    assert_eq!(fresh.page, 1);
    assert_eq!(fresh.query.search, "invoice");

    feed.apply(FeedAction::Finished {
        ticket: stale,
        result: Ok(TaskPage {
            task_list: vec![task(9, "Old filter straggler")],
            total_pages: 1,
            total_records: 1,
        }),
    });
    assert!(feed.tasks().is_empty());

    feed.apply(FeedAction::Finished {
        ticket: fresh,
        result: Ok(TaskPage {
            task_list: vec![task(4, "Invoice follow-up")],
            total_pages: 1,
            total_records: 1,
        }),
    });
    assert_eq!(feed.tasks().len(), 1);
    assert_eq!(feed.tasks()[0].task_id, 4);
}

#[test]
fn submit_payloads_switch_on_identifier_presence() {
    // Scenario C: creating sends no identifier.
    let create = TaskDraft::blank().to_upsert().form_params();
    assert!(!create.iter().any(|(name, _)| *name == "task_id"));

    // Scenario D: editing task 7 includes it.
    let edited = TaskDraft {
        task_id: Some(7),
        title: "Renew certificates".to_string(),
        description: "Before they lapse".to_string(),
        status: TaskStatus::Processing,
        due_date: None,
    };
    let params = edited.to_upsert().form_params();
    assert!(params.contains(&("task_id", "7".to_string())));
}

#[test]
fn unauthorized_classifies_as_session_expiry() {
    // Scenario E: the page layer reacts to this by clearing the token,
    // toasting, and redirecting after the configured delay.
    assert_eq!(classify(401, None), ApiOutcome::<serde_json::Value>::SessionExpired);
}
