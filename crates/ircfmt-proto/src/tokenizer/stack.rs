//! Stack of currently open formats.

use smallvec::SmallVec;

use crate::format::TagKind;

/// Something that is open and must be closed before the output ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Open {
    /// A toggle tag.
    Tag(TagKind),
    /// A color span.
    Color,
}

/// Open formats in the order they were opened.
///
/// Entries are removed by name as well as from the top, so this is not a
/// strict stack: a tag may close while tags opened after it stay open.
#[derive(Debug, Default)]
pub(crate) struct OpenStack {
    entries: SmallVec<[Open; 8]>,
}

impl OpenStack {
    pub(crate) fn push(&mut self, open: Open) {
        self.entries.push(open);
    }

    pub(crate) fn pop(&mut self) -> Option<Open> {
        self.entries.pop()
    }

    /// Remove the most recent occurrence of `open`, returning whether one existed.
    pub(crate) fn remove_last(&mut self, open: Open) -> bool {
        match self.entries.iter().rposition(|e| *e == open) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every [`Open::Color`] entry, returning how many there were.
    pub(crate) fn remove_colors(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| *e != Open::Color);
        before - self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[Open] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_last_by_name() {
        let mut stack = OpenStack::default();
        stack.push(Open::Tag(TagKind::Bold));
        stack.push(Open::Tag(TagKind::Italic));
        stack.push(Open::Tag(TagKind::Bold));

        assert!(stack.remove_last(Open::Tag(TagKind::Bold)));
        assert_eq!(
            stack.as_slice(),
            &[Open::Tag(TagKind::Bold), Open::Tag(TagKind::Italic)]
        );
        assert!(!stack.remove_last(Open::Tag(TagKind::Underline)));
    }

    #[test]
    fn test_remove_colors() {
        let mut stack = OpenStack::default();
        stack.push(Open::Color);
        stack.push(Open::Tag(TagKind::Bold));
        stack.push(Open::Color);

        assert_eq!(stack.remove_colors(), 2);
        assert_eq!(stack.as_slice(), &[Open::Tag(TagKind::Bold)]);
        assert_eq!(stack.remove_colors(), 0);
        assert_eq!(stack.pop(), Some(Open::Tag(TagKind::Bold)));
        assert_eq!(stack.pop(), None);
    }
}
