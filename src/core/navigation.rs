//! Active view tracking and the late-result guard for topic requests.

use crate::models::View;

/// Identifies one topic selection. Only the latest ticket may change the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Which view is showing, plus the generation counter for topic requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    active: View,
    generation: u64,
}

impl Navigator {
    pub fn active(&self) -> View {
        self.active
    }

    /// Activate exactly one view. Any pending topic request is superseded.
    pub fn show(&mut self, view: View) {
        self.active = view;
        self.generation += 1;
    }

    /// Start a topic request, superseding any earlier one.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket(self.generation)
    }

    /// Whether a resolved request may still act on the view.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Activate a view for a resolved request. Returns `false` and leaves
    /// the view alone if the request has been superseded.
    pub fn complete(&mut self, ticket: RequestTicket, view: View) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.active = view;
        true
    }
}
