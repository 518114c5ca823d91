use common::actions::{ActionOutcome, ActionTarget};

pub enum Msg {
    /// An approve or deny button was clicked.
    Action(ActionTarget),
    /// A dispatched action reached its terminal state.
    Settled(ActionTarget, ActionOutcome),
}
