use std::collections::HashMap;

use crate::image::ImageId;

/// Identifies one request started through [`InFlight::begin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    image_id: ImageId,
    seq: u64,
}

impl Ticket {
    pub fn image_id(&self) -> &ImageId {
        &self.image_id
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// At most one live request per image; a newer request supersedes the older one.
///
/// `H` is whatever the caller needs to cancel a request (an abort controller in the browser).
pub struct InFlight<H> {
    next_seq: u64,
    entries: HashMap<ImageId, (u64, H)>,
}

impl<H> Default for InFlight<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> InFlight<H> {
    pub fn new() -> Self {
        Self {
            next_seq: 1,
            entries: HashMap::new(),
        }
    }

    /// Registers a request and hands back the handle of the one it replaces, if any.
    pub fn begin(&mut self, image_id: ImageId, handle: H) -> (Ticket, Option<H>) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        let superseded = self
            .entries
            .insert(image_id.clone(), (seq, handle))
            .map(|(_, previous)| previous);
        (Ticket { image_id, seq }, superseded)
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.entries
            .get(&ticket.image_id)
            .is_some_and(|(seq, _)| *seq == ticket.seq)
    }

    /// Ends a request. Returns true when its response may still be applied.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }
        self.entries.remove(&ticket.image_id);
        true
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}
