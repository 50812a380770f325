use crate::protocol::{
  TaskListArgs,
  TaskPage
};
use crate::task::{
  Task,
  TaskStatus
};

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
)]
pub struct ListQuery {
  pub search:        String,
  pub status_filter:
    Option<TaskStatus>
}

/// Snapshot of the query state a
/// fetch was issued for. A response
/// is applied only while its ticket
/// is still the current in-flight
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
  pub generation: u64,
  pub page:       u32,
  pub reset:      bool,
  pub query:      ListQuery
}

impl FetchTicket {
  #[must_use]
  pub fn list_args(
    &self
  ) -> TaskListArgs {
    TaskListArgs {
      status_filter: self
        .query
        .status_filter,
      skip:          self.page,
      search:        self
        .query
        .search
        .clone()
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum FeedPhase {
  Idle,
  Fetching,
  HasMore,
  Exhausted
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
  Restart,
  SearchChanged(String),
  FilterChanged(Option<TaskStatus>),
  ScrolledToBottom,
  Finished {
    ticket: FetchTicket,
    result: Result<TaskPage, String>
  },
  TaskRemoved(i64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskFeed {
  tasks:       Vec<Task>,
  query:       ListQuery,
  page:        u32,
  total_pages: u32,
  exhausted:   bool,
  generation:  u64,
  in_flight:   Option<FetchTicket>,
  error:       Option<String>
}

impl Default for TaskFeed {
  fn default() -> Self {
    Self::new()
  }
}

impl TaskFeed {
  #[must_use]
  pub fn new() -> Self {
    Self {
      tasks:       Vec::new(),
      query:       ListQuery::default(),
      page:        1,
      total_pages: 0,
      exhausted:   false,
      generation:  0,
      in_flight:   None,
      error:       None
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn query(&self) -> &ListQuery {
    &self.query
  }

  pub fn page(&self) -> u32 {
    self.page
  }

  pub fn total_pages(&self) -> u32 {
    self.total_pages
  }

  pub fn error(
    &self
  ) -> Option<&str> {
    self.error.as_deref()
  }

  pub fn in_flight(
    &self
  ) -> Option<&FetchTicket> {
    self.in_flight.as_ref()
  }

  pub fn is_fetching(&self) -> bool {
    self.in_flight.is_some()
  }

  pub fn is_exhausted(&self) -> bool {
    self.exhausted
  }

  pub fn phase(&self) -> FeedPhase {
    if self.in_flight.is_some() {
      FeedPhase::Fetching
    } else if self.exhausted {
      FeedPhase::Exhausted
    } else if self.page
      < self.total_pages
    {
      FeedPhase::HasMore
    } else {
      FeedPhase::Idle
    }
  }

  pub fn apply(
    &mut self,
    action: FeedAction
  ) {
    match action {
      | FeedAction::Restart => {
        self.restart();
      }
      | FeedAction::SearchChanged(
        search
      ) => {
        self.set_search(search);
      }
      | FeedAction::FilterChanged(
        filter
      ) => {
        self
          .set_status_filter(filter);
      }
      | FeedAction::ScrolledToBottom => {
        self.scrolled_to_bottom();
      }
      | FeedAction::Finished {
        ticket,
        result
      } => {
        self.finish(&ticket, result);
      }
      | FeedAction::TaskRemoved(
        task_id
      ) => {
        self.remove_task(task_id);
      }
    }
  }

  /// Discards everything and queues a
  /// reset fetch for page 1. The
  /// generation bump strands any
  /// response still in flight.
  pub fn restart(&mut self) {
    self.tasks.clear();
    self.page = 1;
    self.total_pages = 0;
    self.exhausted = false;
    self.error = None;
    self.generation =
      self.generation.wrapping_add(1);
    self.in_flight =
      Some(self.ticket(true));
  }

  pub fn set_search(
    &mut self,
    search: String
  ) {
    if self.query.search == search {
      return;
    }
    self.query.search = search;
    self.restart();
  }

  pub fn set_status_filter(
    &mut self,
    filter: Option<TaskStatus>
  ) {
    if self.query.status_filter
      == filter
    {
      return;
    }
    self.query.status_filter = filter;
    self.restart();
  }

  pub fn scrolled_to_bottom(
    &mut self
  ) {
    if self.in_flight.is_some()
      || self.exhausted
      || self.page >= self.total_pages
    {
      return;
    }
    self.page += 1;
    self.in_flight =
      Some(self.ticket(false));
  }

  pub fn finish(
    &mut self,
    ticket: &FetchTicket,
    result: Result<TaskPage, String>
  ) {
    match self.in_flight.as_ref() {
      | Some(current)
        if current == ticket => {}
      | _ => {
        tracing::debug!(
          generation =
            ticket.generation,
          page = ticket.page,
          "dropping response for a \
           superseded fetch"
        );
        return;
      }
    }
    self.in_flight = None;

    match result {
      | Ok(page) => {
        self.absorb(ticket, page);
      }
      | Err(message) => {
        tracing::warn!(
          %message,
          page = ticket.page,
          "task list fetch failed"
        );
        self.error = Some(message);
      }
    }
  }

  pub fn remove_task(
    &mut self,
    task_id: i64
  ) {
    self.tasks.retain(|task| {
      task.task_id != task_id
    });
  }

  fn absorb(
    &mut self,
    ticket: &FetchTicket,
    page: TaskPage
  ) {
    if ticket.reset {
      self.tasks = page.task_list;
    } else {
      let mut fresh: Vec<Task> = page
        .task_list
        .into_iter()
        .filter(|task| {
          !self
            .contains(task.task_id)
        })
        .collect();
      if fresh.is_empty() {
        self.exhausted = true;
      } else {
        self.tasks.append(&mut fresh);
      }
    }
    self.total_pages =
      page.total_pages;
    self.error = None;
  }

  fn contains(
    &self,
    task_id: i64
  ) -> bool {
    self.tasks.iter().any(|task| {
      task.task_id == task_id
    })
  }

  fn ticket(
    &self,
    reset: bool
  ) -> FetchTicket {
    FetchTicket {
      generation: self.generation,
      page:       self.page,
      reset,
      query:      self.query.clone()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    FeedPhase,
    TaskFeed
  };
  use crate::protocol::TaskPage;
  use crate::task::{
    Task,
    TaskStatus
  };

  fn task(id: i64) -> Task {
    Task {
      task_id:          id,
      task_title:       format!(
        "task {id}"
      ),
      task_description: String::new(),
      task_status:
        TaskStatus::Pending,
      task_due_date:    None
    }
  }

  fn page(
    ids: &[i64],
    total_pages: u32
  ) -> TaskPage {
    TaskPage {
      task_list:     ids
        .iter()
        .copied()
        .map(task)
        .collect(),
      total_pages,
      total_records: ids.len() as u64
    }
  }

  fn ids(feed: &TaskFeed) -> Vec<i64> {
    feed
      .tasks()
      .iter()
      .map(|task| task.task_id)
      .collect()
  }

  #[test]
  fn merge_never_duplicates_ids() {
    let mut feed = TaskFeed::new();
    feed.restart();
    let first = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &first,
      Ok(page(&[1, 2, 3], 3))
    );

    feed.scrolled_to_bottom();
    let second = feed
      .in_flight()
      .cloned()
      .unwrap();
    assert!(!second.reset);
    feed.finish(
      &second,
      Ok(page(&[3, 2, 4], 3))
    );

    assert_eq!(
      ids(&feed),
      vec![1, 2, 3, 4]
    );
    assert!(!feed.is_exhausted());
  }

  #[test]
  fn query_change_resets_even_mid_fetch()
   {
    let mut feed = TaskFeed::new();
    feed.restart();
    let first = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed
      .finish(&first, Ok(page(&[1, 2], 4)));

    feed.scrolled_to_bottom();
    let stale = feed
      .in_flight()
      .cloned()
      .unwrap();

    feed.set_search(
      "report".to_string()
    );
    let reset = feed
      .in_flight()
      .cloned()
      .unwrap();
    assert!(reset.reset);
    assert_eq!(reset.page, 1);
    assert_eq!(
      reset.query.search,
      "report"
    );
    assert!(feed.tasks().is_empty());

    // The slow response for the old
    // query must not leak into the
    // new collection.
    feed.finish(
      &stale,
      Ok(page(&[8, 9], 4))
    );
    assert!(feed.tasks().is_empty());
    assert!(feed.is_fetching());

    feed.finish(
      &reset,
      Ok(page(&[5], 1))
    );
    assert_eq!(ids(&feed), vec![5]);
  }

  #[test]
  fn second_trigger_while_fetching_is_a_noop()
   {
    let mut feed = TaskFeed::new();
    feed.restart();
    let first = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &first,
      Ok(page(&[1, 2], 3))
    );

    feed.scrolled_to_bottom();
    let ticket = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.scrolled_to_bottom();
    feed.scrolled_to_bottom();
    assert_eq!(
      feed.in_flight(),
      Some(&ticket)
    );
    assert_eq!(feed.page(), 2);
  }

  #[test]
  fn empty_page_exhausts_until_reset()
  {
    let mut feed = TaskFeed::new();
    feed.restart();
    let first = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &first,
      Ok(page(&[1, 2], 2))
    );

    feed.scrolled_to_bottom();
    let second = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed
      .finish(&second, Ok(page(&[], 2)));
    assert!(feed.is_exhausted());
    assert_eq!(
      feed.phase(),
      FeedPhase::Exhausted
    );

    feed.scrolled_to_bottom();
    assert!(feed.in_flight().is_none());

    feed.restart();
    assert!(!feed.is_exhausted());
    assert!(feed.is_fetching());
  }

  #[test]
  fn duplicate_only_page_exhausts() {
    let mut feed = TaskFeed::new();
    feed.restart();
    let first = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &first,
      Ok(page(&[1, 2], 5))
    );

    feed.scrolled_to_bottom();
    let second = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &second,
      Ok(page(&[2, 1], 5))
    );
    assert!(feed.is_exhausted());
    assert_eq!(
      ids(&feed),
      vec![1, 2]
    );
  }

  #[test]
  fn fetch_failure_is_an_explicit_state()
   {
    let mut feed = TaskFeed::new();
    feed.restart();
    let first = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &first,
      Ok(page(&[1], 3))
    );

    feed.scrolled_to_bottom();
    let second = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &second,
      Err(
        "Request failed (HTTP 500)"
          .to_string()
      )
    );
    assert_eq!(
      feed.error(),
      Some(
        "Request failed (HTTP 500)"
      )
    );
    assert_eq!(ids(&feed), vec![1]);

    feed.scrolled_to_bottom();
    let retry = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &retry,
      Ok(page(&[2], 3))
    );
    assert!(feed.error().is_none());
  }

  #[test]
  fn filter_change_is_ignored_when_equal()
   {
    let mut feed = TaskFeed::new();
    feed.restart();
    let first = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &first,
      Ok(page(&[1], 1))
    );

    feed.set_status_filter(None);
    assert!(feed.in_flight().is_none());
    assert_eq!(ids(&feed), vec![1]);

    feed.set_status_filter(Some(
      TaskStatus::Completed
    ));
    assert!(feed.tasks().is_empty());
    assert!(feed.is_fetching());
  }

  #[test]
  fn removal_is_local() {
    let mut feed = TaskFeed::new();
    feed.restart();
    let first = feed
      .in_flight()
      .cloned()
      .unwrap();
    feed.finish(
      &first,
      Ok(page(&[1, 2, 3], 1))
    );

    feed.remove_task(2);
    assert_eq!(
      ids(&feed),
      vec![1, 3]
    );
    assert!(feed.in_flight().is_none());
  }
}
