mod error;
pub mod sink;

pub use model::{
    interaction::{Action, Interaction, PollView, Reply},
    Draft, HostEvent, Outcome, PollIndex, ViewerId,
};
pub use sink::{Discard, HostSink};
pub use store::{Poll, PollStore, VotePolicy};

/// Presentation boundary around a single [`PollStore`]. Every interaction is
/// answered with a [`Reply`]; failures become user-facing error messages and
/// never abort the session.
pub struct Board<S> {
    store: PollStore,
    /// Where host notifications go.
    sink: S,
}

impl<S: HostSink> Board<S> {
    pub fn new(policy: VotePolicy, sink: S) -> Self {
        Self { store: PollStore::new(policy), sink }
    }

    pub fn store(&self) -> &PollStore {
        &self.store
    }

    pub fn on_interaction(&mut self, interaction: Interaction) -> Reply {
        let Interaction { viewer, action } = interaction;
        let result = match action {
            Action::Create(draft) => self.on_create(draft),
            Action::Vote { poll, option } => self.on_vote(viewer, poll, option),
            Action::Select { poll } => self.on_select(viewer, poll),
            Action::List => Ok(self.on_list(viewer)),
        };

        let message = match result {
            Ok(reply) => return reply,
            Err(err) => err.to_string(),
        };

        Reply::Error { message }
    }

    fn on_create(&mut self, draft: Draft) -> error::Result<Reply> {
        match self.store.submit(draft) {
            Ok(poll) => Ok(Reply::Created { poll }),
            Err(err) if err.is_validation() => {
                log::info!("poll form sent back to the viewer: {err}");
                Err(err.into())
            }
            Err(err) => {
                log::error!("unexpected failure while creating a poll: {err}");
                Err(err.into())
            }
        }
    }

    fn on_vote(&mut self, viewer: ViewerId, poll: PollIndex, option: usize) -> error::Result<Reply> {
        self.store.cast_vote(viewer, poll, option)?;
        self.sink.publish(HostEvent::PollVoted { result: Outcome::Success });
        let poll = self.view(viewer, poll).ok_or(error::Error::UnknownPoll)?;
        Ok(Reply::Voted { poll })
    }

    fn on_select(&self, viewer: ViewerId, poll: PollIndex) -> error::Result<Reply> {
        let view = self.view(viewer, poll).ok_or(error::Error::UnknownPoll)?;
        self.sink.publish(HostEvent::SelectPoll { poll_id: poll });
        Ok(Reply::Poll { poll: view })
    }

    fn on_list(&self, viewer: ViewerId) -> Reply {
        let polls = self.store.list_polls().enumerate().map(|(index, poll)| self.render(viewer, index, poll)).collect();
        Reply::Polls { polls }
    }

    fn view(&self, viewer: ViewerId, index: PollIndex) -> Option<PollView> {
        let poll = self.store.get_poll(index)?;
        Some(self.render(viewer, index, poll))
    }

    fn render(&self, viewer: ViewerId, index: PollIndex, poll: &Poll) -> PollView {
        PollView {
            index,
            question: poll.question.clone(),
            choices: poll.choices.clone(),
            voted: self.store.voted_choice(viewer, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Board, Discard, Draft, HostEvent, Interaction, Outcome, Reply, ViewerId, VotePolicy};
    use model::Choice;
    use tokio::sync::mpsc;

    fn viewer(id: u64) -> ViewerId {
        ViewerId::new(id).unwrap()
    }

    fn interact(viewer_id: u64, action: Action) -> Interaction {
        Interaction { viewer: viewer(viewer_id), action }
    }

    fn create(question: &str, options: &[&str]) -> Action {
        Action::Create(Draft::new(question, options.iter().copied()))
    }

    fn choice(text: &str, votes: u64) -> Choice {
        Choice { text: text.into(), votes }
    }

    #[test]
    fn votes_notify_the_host_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut board = Board::new(VotePolicy::OncePerViewer, tx);

        let reply = board.on_interaction(interact(1, create("Coffee or Tea?", &["Coffee", "Tea"])));
        assert_eq!(reply, Reply::Created { poll: 0 });
        assert!(rx.try_recv().is_err());

        let Reply::Voted { poll } = board.on_interaction(interact(2, Action::Vote { poll: 0, option: 0 })) else {
            panic!("vote was not accepted");
        };
        assert_eq!(poll.choices, [choice("Coffee", 1), choice("Tea", 0)]);
        assert_eq!(poll.voted, Some(0));
        assert_eq!(rx.try_recv().unwrap(), HostEvent::PollVoted { result: Outcome::Success });

        let reply = board.on_interaction(interact(2, Action::Vote { poll: 0, option: 1 }));
        assert_eq!(reply, Reply::Error { message: String::from("You have already voted on this poll.") });
        assert!(rx.try_recv().is_err());
        assert_eq!(board.store().get_poll(0).unwrap().choices, [choice("Coffee", 1), choice("Tea", 0)]);
    }

    #[test]
    fn rejected_polls_are_reported() {
        let mut board = Board::new(VotePolicy::default(), Discard);

        let reply = board.on_interaction(interact(1, create("", &["A", "B"])));
        assert_eq!(reply, Reply::Error { message: String::from("Please enter a question.") });

        let reply = board.on_interaction(interact(1, create("Pick one", &["OnlyOne", " "])));
        assert_eq!(reply, Reply::Error { message: String::from("Please fill in at least two options.") });

        assert!(board.store().is_empty());
    }

    #[test]
    fn selecting_a_poll_reports_its_position() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut board = Board::new(VotePolicy::default(), tx);
        board.on_interaction(interact(1, create("Coffee or Tea?", &["Coffee", "Tea"])));
        board.on_interaction(interact(1, create("Cats or Dogs?", &["Cats", "Dogs"])));

        let Reply::Poll { poll } = board.on_interaction(interact(3, Action::Select { poll: 1 })) else {
            panic!("poll was not found");
        };
        assert_eq!(poll.index, 1);
        assert_eq!(poll.question, "Coffee or Tea?");
        assert_eq!(rx.try_recv().unwrap(), HostEvent::SelectPoll { poll_id: 1 });

        let reply = board.on_interaction(interact(3, Action::Select { poll: 2 }));
        assert_eq!(reply, Reply::Error { message: String::from("That poll or option does not exist.") });
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn listing_marks_the_viewers_own_votes() {
        let mut board = Board::new(VotePolicy::default(), Discard);
        board.on_interaction(interact(1, create("Coffee or Tea?", &["Coffee", "Tea"])));
        board.on_interaction(interact(1, create("Cats or Dogs?", &["Cats", "Dogs"])));
        board.on_interaction(interact(2, Action::Vote { poll: 1, option: 1 }));

        let Reply::Polls { polls } = board.on_interaction(interact(2, Action::List)) else {
            panic!("expected a listing");
        };
        let summary: Vec<_> = polls.iter().map(|view| (view.question.as_str(), view.voted)).collect();
        assert_eq!(summary, [("Cats or Dogs?", None), ("Coffee or Tea?", Some(1))]);

        let Reply::Polls { polls } = board.on_interaction(interact(3, Action::List)) else {
            panic!("expected a listing");
        };
        assert!(polls.iter().all(|view| view.voted.is_none()));
    }

    #[test]
    fn unlimited_boards_accept_repeat_votes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut board = Board::new(VotePolicy::Unlimited, tx);
        board.on_interaction(interact(1, create("Coffee or Tea?", &["Coffee", "Tea"])));
        for _ in 0..3 {
            let reply = board.on_interaction(interact(2, Action::Vote { poll: 0, option: 1 }));
            assert!(matches!(reply, Reply::Voted { .. }));
        }
        assert_eq!(board.store().get_poll(0).unwrap().choices, [choice("Coffee", 0), choice("Tea", 3)]);
        for _ in 0..3 {
            assert_eq!(rx.try_recv().unwrap(), HostEvent::PollVoted { result: Outcome::Success });
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_host_channel_does_not_block_votes() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut board = Board::new(VotePolicy::default(), tx);
        board.on_interaction(interact(1, create("Coffee or Tea?", &["Coffee", "Tea"])));
        let reply = board.on_interaction(interact(1, Action::Vote { poll: 0, option: 0 }));
        assert!(matches!(reply, Reply::Voted { .. }));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn host_receives_events_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut board = Board::new(VotePolicy::default(), tx);
        board.on_interaction(interact(1, create("Coffee or Tea?", &["Coffee", "Tea"])));
        board.on_interaction(interact(1, Action::Select { poll: 0 }));
        board.on_interaction(interact(1, Action::Vote { poll: 0, option: 1 }));
        drop(board);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        assert_eq!(
            events,
            [HostEvent::SelectPoll { poll_id: 0 }, HostEvent::PollVoted { result: Outcome::Success }]
        );
    }

    #[test]
    fn host_events_use_the_embedding_wire_format() {
        let voted = serde_json::to_value(HostEvent::PollVoted { result: Outcome::Success }).unwrap();
        assert_eq!(voted, serde_json::json!({ "type": "poll_voted", "result": "success" }));
        let selected = serde_json::to_value(HostEvent::SelectPoll { poll_id: 4 }).unwrap();
        assert_eq!(selected, serde_json::json!({ "type": "select_poll", "pollId": 4 }));
    }

    #[test]
    fn parses_interactions_from_json() {
        let create: Interaction = serde_json::from_str(
            r#"{"viewer":7,"type":"create","question":"Coffee or Tea?","options":["Coffee","Tea"]}"#,
        )
        .unwrap();
        assert_eq!(create, interact(7, create_action()));

        let vote: Interaction = serde_json::from_str(r#"{"viewer":7,"type":"vote","poll":0,"option":1}"#).unwrap();
        assert_eq!(vote, interact(7, Action::Vote { poll: 0, option: 1 }));

        let list: Interaction = serde_json::from_str(r#"{"type":"list","viewer":3}"#).unwrap();
        assert_eq!(list, interact(3, Action::List));

        assert!(serde_json::from_str::<Interaction>(r#"{"viewer":0,"type":"list"}"#).is_err());
        assert!(serde_json::from_str::<Interaction>(r#"{"viewer":1,"type":"delete","poll":0}"#).is_err());
    }

    fn create_action() -> Action {
        create("Coffee or Tea?", &["Coffee", "Tea"])
    }
}
