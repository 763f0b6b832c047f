//! Submission lifecycle shared by the form screens.
//!
//! `Editing → Submitting → { Succeeded | Editing (after an alert) }`

use api::ImageAttachment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

impl SubmitState {
    /// Move to `Submitting`. Returns `false` if a submission is already in flight
    /// or the form is done.
    pub fn begin(&mut self) -> bool {
        if *self == SubmitState::Editing {
            *self = SubmitState::Submitting;
            true
        } else {
            false
        }
    }

    /// Record the outcome of the in-flight submission.
    pub fn finish<T, E>(&mut self, outcome: &Result<T, E>) {
        *self = match outcome {
            Ok(_) => SubmitState::Succeeded,
            Err(_) => SubmitState::Editing,
        };
    }

    pub fn is_submitting(&self) -> bool {
        *self == SubmitState::Submitting
    }
}

/// The photo picked in a form, read asynchronously.
///
/// Each selection takes a ticket; only the read holding the latest ticket may
/// fill the slot, so a slow earlier read never replaces a newer pick. While a
/// read is pending the form must not be submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttachmentSlot {
    ticket: u64,
    reading: bool,
    image: Option<ImageAttachment>,
}

impl AttachmentSlot {
    /// Start reading a newly picked file. Returns the ticket for [`finish`](Self::finish).
    pub fn select(&mut self) -> u64 {
        self.ticket += 1;
        self.reading = true;
        self.image = None;
        self.ticket
    }

    /// Drop the current selection and any read still in flight.
    pub fn clear(&mut self) {
        self.ticket += 1;
        self.reading = false;
        self.image = None;
    }

    /// Store the result of a read. Stale tickets are ignored; returns whether
    /// the result was kept.
    pub fn finish(&mut self, ticket: u64, image: Option<ImageAttachment>) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.reading = false;
        self.image = image;
        true
    }

    pub fn is_reading(&self) -> bool {
        self.reading
    }

    pub fn image(&self) -> Option<ImageAttachment> {
        self.image.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(state.is_submitting());

        state.finish(&Ok::<(), ()>(()));
        assert_eq!(state, SubmitState::Succeeded);
        assert!(!state.begin());
    }

    #[test]
    fn test_failure_returns_to_editing() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        state.finish(&Err::<(), _>("Server error"));
        assert_eq!(state, SubmitState::Editing);

        // Usable again
        assert!(state.begin());
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.is_submitting());
    }

    fn photo(name: &str) -> ImageAttachment {
        ImageAttachment {
            file_name: name.to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_attachment_pending_until_read_finishes() {
        let mut slot = AttachmentSlot::default();
        let ticket = slot.select();
        assert!(slot.is_reading());
        assert!(slot.image().is_none());

        assert!(slot.finish(ticket, Some(photo("a.png"))));
        assert!(!slot.is_reading());
        assert_eq!(slot.image(), Some(photo("a.png")));
    }

    #[test]
    fn test_stale_read_does_not_replace_newer_pick() {
        let mut slot = AttachmentSlot::default();
        let first = slot.select();
        let second = slot.select();

        assert!(slot.finish(second, Some(photo("second.png"))));
        assert!(!slot.finish(first, Some(photo("first.png"))));
        assert_eq!(slot.image(), Some(photo("second.png")));
        assert!(!slot.is_reading());
    }

    #[test]
    fn test_clear_discards_in_flight_read() {
        let mut slot = AttachmentSlot::default();
        let ticket = slot.select();
        slot.clear();

        assert!(!slot.finish(ticket, Some(photo("late.png"))));
        assert!(slot.image().is_none());
        assert!(!slot.is_reading());
    }

    #[test]
    fn test_failed_read_leaves_no_image() {
        let mut slot = AttachmentSlot::default();
        let ticket = slot.select();
        assert!(slot.finish(ticket, None));
        assert!(!slot.is_reading());
        assert!(slot.image().is_none());
    }
}
