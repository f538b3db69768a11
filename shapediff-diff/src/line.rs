/// One node of a diff tree.
///
/// A line is built once by the differ and never changes afterwards. Whether it may be
/// reordered among its siblings is part of the line itself: map keys, set elements and
/// fields are orderable, `Expected`/`Received` pairs and count blocks are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    contents: String,
    indentation_level: usize,
    children: Vec<Line>,
    can_be_ordered: bool,
}

impl Line {
    /// Creates a line.
    pub fn new(
        contents: impl Into<String>,
        indentation_level: usize,
        children: Vec<Line>,
        can_be_ordered: bool,
    ) -> Self {
        Self {
            contents: contents.into(),
            indentation_level,
            children,
            can_be_ordered,
        }
    }

    /// A line that may be sorted among orderable siblings.
    pub fn orderable(contents: impl Into<String>, indentation_level: usize, children: Vec<Line>) -> Self {
        Self::new(contents, indentation_level, children, true)
    }

    /// A line that keeps its position, and the position of all its siblings.
    pub fn fixed(contents: impl Into<String>, indentation_level: usize, children: Vec<Line>) -> Self {
        Self::new(contents, indentation_level, children, false)
    }

    /// The text of this line, without indentation.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// How many indentation units precede the contents.
    pub fn indentation_level(&self) -> usize {
        self.indentation_level
    }

    /// Nested lines, in producer order.
    pub fn children(&self) -> &[Line] {
        &self.children
    }

    /// Whether this line may be sorted among its siblings.
    pub fn can_be_ordered(&self) -> bool {
        self.can_be_ordered
    }

    /// Whether this line has nested lines.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
