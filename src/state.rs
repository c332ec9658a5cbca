use crate::data::Pos;

/// Player position plus box positions.
///
/// Boxes are kept sorted so two states with the same set of boxes
/// compare and hash equal no matter in which order the boxes were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub(crate) player_pos: Pos,
    pub(crate) boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { player_pos, boxes }
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub(crate) fn box_index(&self, pos: Pos) -> Option<usize> {
        self.boxes.binary_search(&pos).ok()
    }

    pub(crate) fn has_box(&self, pos: Pos) -> bool {
        self.box_index(pos).is_some()
    }

    /// Moves one box, keeping the canonical order.
    pub(crate) fn with_moved_box(&self, player_pos: Pos, box_index: usize, dest: Pos) -> State {
        let mut boxes = self.boxes.clone();
        boxes[box_index] = dest;
        State::new(player_pos, boxes)
    }
}
