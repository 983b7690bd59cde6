use crate::action::{ActionRequest, DialogSpec};

/// Where a single action invocation currently is. Each flow walks
/// confirmation, dispatch, and the result dialog in order and is dropped
/// from the state once it ends.
#[derive(Clone, PartialEq, Debug)]
pub enum FlowPhase {
    AwaitingConfirmation,
    Dispatching,
    ShowingResult(DialogSpec),
}

#[derive(Clone, PartialEq, Debug)]
pub struct ActionFlow {
    pub id: u64,
    pub request: ActionRequest,
    pub phase: FlowPhase,
}

/// Live action flows. Flows are independent: ids never collide, and
/// confirming or cancelling one leaves the others untouched.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    flows: Vec<ActionFlow>,
    next_flow_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flows(&self) -> &[ActionFlow] {
        &self.flows
    }

    fn push(&mut self, request: ActionRequest, phase: FlowPhase) -> u64 {
        let id = self.next_flow_id;
        self.next_flow_id += 1;
        self.flows.push(ActionFlow { id, request, phase });
        id
    }

    /// Opens a confirmation dialog for `request`.
    pub fn begin(&mut self, request: ActionRequest) -> u64 {
        self.push(request, FlowPhase::AwaitingConfirmation)
    }

    /// Registers a flow that skips confirmation and is already in flight.
    pub fn begin_dispatching(&mut self, request: ActionRequest) -> u64 {
        self.push(request, FlowPhase::Dispatching)
    }

    /// Affirmative answer to the confirmation dialog. Returns the request to
    /// send, or None if the flow is gone or already past confirmation.
    pub fn confirm(&mut self, id: u64) -> Option<ActionRequest> {
        let flow = self
            .flows
            .iter_mut()
            .find(|f| f.id == id && f.phase == FlowPhase::AwaitingConfirmation)?;
        flow.phase = FlowPhase::Dispatching;
        Some(flow.request.clone())
    }

    /// Declined confirmation: the flow ends with nothing sent.
    pub fn cancel(&mut self, id: u64) {
        self.flows.retain(|f| f.id != id);
    }

    /// The request finished; show its result dialog.
    pub fn complete(&mut self, id: u64, dialog: DialogSpec) {
        if let Some(flow) = self.flows.iter_mut().find(|f| f.id == id) {
            flow.phase = FlowPhase::ShowingResult(dialog);
        }
    }

    /// The result dialog was dismissed. Returns whether the page should be
    /// force-reloaded (true exactly for successful actions).
    pub fn dismiss(&mut self, id: u64) -> bool {
        let reload = self
            .flows
            .iter()
            .find(|f| f.id == id)
            .map(|f| match &f.phase {
                FlowPhase::ShowingResult(dialog) => dialog.reload_on_dismiss,
                _ => false,
            })
            .unwrap_or(false);
        self.flows.retain(|f| f.id != id);
        reload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionOutcome, Verb, outcome_for};

    fn delete_request() -> ActionRequest {
        ActionRequest::new("/audiences/delete/7", Verb::Delete)
    }

    #[test]
    fn test_cancel_ends_flow_without_dispatch() {
        let mut state = AppState::new();
        let id = state.begin(delete_request());
        assert_eq!(state.flows().len(), 1);
        assert_eq!(state.flows()[0].phase, FlowPhase::AwaitingConfirmation);

        state.cancel(id);
        assert!(state.flows().is_empty());
        // A cancelled flow cannot be confirmed afterwards.
        assert_eq!(state.confirm(id), None);
    }

    #[test]
    fn test_confirm_hands_back_the_request_unchanged() {
        let mut state = AppState::new();
        let id = state.begin(delete_request());

        let request = state.confirm(id).expect("flow awaits confirmation");
        assert_eq!(request, delete_request());
        assert_eq!(state.flows()[0].phase, FlowPhase::Dispatching);
    }

    #[test]
    fn test_confirm_is_single_shot() {
        let mut state = AppState::new();
        let id = state.begin(delete_request());

        assert!(state.confirm(id).is_some());
        assert_eq!(state.confirm(id), None);
    }

    #[test]
    fn test_flows_are_independent() {
        let mut state = AppState::new();
        let first = state.begin(ActionRequest::new("/users/delete/1", Verb::Delete));
        let second = state.begin(ActionRequest::new("/users/reset/2", Verb::Put));
        assert_ne!(first, second);

        state.cancel(first);

        let request = state.confirm(second).expect("second flow is untouched");
        assert_eq!(request.endpoint, "/users/reset/2");
        assert_eq!(state.flows().len(), 1);
    }

    #[test]
    fn test_dismissing_success_requests_one_reload() {
        let mut state = AppState::new();
        let id = state.begin_dispatching(delete_request());

        let dialog = outcome_for(200, Some("OK"), "OK".to_string()).dialog();
        state.complete(id, dialog);

        assert!(state.dismiss(id));
        assert!(state.flows().is_empty());
        // The flow is gone; a stray second dismissal reloads nothing.
        assert!(!state.dismiss(id));
    }

    #[test]
    fn test_dismissing_failure_never_reloads() {
        let mut state = AppState::new();
        let id = state.begin_dispatching(delete_request());

        let outcome = outcome_for(404, Some("Not Found"), "no such record".to_string());
        assert!(matches!(outcome, ActionOutcome::Failure(_)));
        state.complete(id, outcome.dialog());

        assert!(!state.dismiss(id));
        assert!(state.flows().is_empty());
    }

    #[test]
    fn test_flow_ids_are_monotonic() {
        let mut state = AppState::new();
        let a = state.begin(delete_request());
        state.cancel(a);
        let b = state.begin(delete_request());
        assert!(b > a);
    }
}
