//! Hierarchical box diagrams built from indented outlines.
//!
//! Lessons describe classification trees (word -> noun / verb / particle, ...)
//! as lines of text where every two leading spaces add one level:
//!
//! ```
//! use qawaid::content::Diagram;
//!
//! let diagram = Diagram::from_outline(&["کلمہ", "  اسم", "  فعل", "  حرف"]).unwrap();
//! assert_eq!(diagram.depth(), 2);
//! assert_eq!(diagram.leaf_count(), 3);
//! ```

/// One labelled box and the boxes hanging below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub label: String,
    pub children: Vec<DiagramNode>,
}

impl DiagramNode {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            children: Vec::new(),
        }
    }

    fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(DiagramNode::leaf_count).sum()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    #[error("diagram outline is empty")]
    Empty,
    #[error("line {line}: indentation must be a multiple of two spaces")]
    OddIndent { line: usize },
    #[error("line {line}: indentation skips a level")]
    IndentJump { line: usize },
    #[error("line {line}: a diagram has exactly one root")]
    MultipleRoots { line: usize },
}

/// A single-rooted tree of labelled boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    root: DiagramNode,
}

impl Diagram {
    /// Parses an outline. Blank lines are ignored; line numbers in errors are 1-based.
    pub fn from_outline<S: AsRef<str>>(lines: &[S]) -> Result<Self, DiagramError> {
        // stack[d] is the open node at depth d
        let mut stack: Vec<DiagramNode> = Vec::new();
        let mut seen_root = false;

        for (idx, raw) in lines.iter().enumerate() {
            let line_no = idx + 1;
            let raw = raw.as_ref().trim_end();
            let label = raw.trim_start_matches(' ');
            if label.is_empty() {
                continue;
            }

            let indent = raw.len() - label.len();
            if indent % 2 != 0 {
                return Err(DiagramError::OddIndent { line: line_no });
            }
            let depth = indent / 2;

            if depth == 0 && seen_root {
                return Err(DiagramError::MultipleRoots { line: line_no });
            }
            if depth > stack.len() {
                return Err(DiagramError::IndentJump { line: line_no });
            }

            close_to(&mut stack, depth);
            stack.push(DiagramNode::new(label.trim()));
            seen_root = true;
        }

        close_to(&mut stack, 1);
        stack.pop().map(|root| Self { root }).ok_or(DiagramError::Empty)
    }

    pub fn root(&self) -> &DiagramNode {
        &self.root
    }

    /// Number of levels, counting the root.
    pub fn depth(&self) -> usize {
        self.levels().len()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Nodes grouped by level, left to right.
    pub fn levels(&self) -> Vec<Vec<&DiagramNode>> {
        let mut levels = Vec::new();
        let mut current = vec![&self.root];
        while !current.is_empty() {
            let next = current.iter().copied().flat_map(|n| n.children.iter()).collect();
            levels.push(current);
            current = next;
        }
        levels
    }
}

/// Pops open nodes until `len` remain, attaching each to its parent.
fn close_to(stack: &mut Vec<DiagramNode>, len: usize) {
    while stack.len() > len.max(1) {
        if let Some(node) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_outline() {
        let diagram = Diagram::from_outline(&[
            "Word",
            "  Noun",
            "    Proper",
            "    Common",
            "  Verb",
            "    Past",
            "    Present",
            "    Command",
            "  Particle",
        ])
        .unwrap();

        assert_eq!(diagram.root().label, "Word");
        assert_eq!(diagram.root().children.len(), 3);
        assert_eq!(diagram.depth(), 3);
        assert_eq!(diagram.leaf_count(), 6);

        let levels = diagram.levels();
        let second: Vec<&str> = levels[1].iter().map(|n| n.label.as_str()).collect();
        assert_eq!(second, ["Noun", "Verb", "Particle"]);
        assert_eq!(levels[2].len(), 5);
    }

    #[test]
    fn test_single_root() {
        let diagram = Diagram::from_outline(&["only"]).unwrap();
        assert_eq!(diagram.depth(), 1);
        assert_eq!(diagram.leaf_count(), 1);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let diagram = Diagram::from_outline(&["root", "", "  a", "   ", "  b"]).unwrap();
        assert_eq!(diagram.root().children.len(), 2);
    }

    #[test]
    fn test_empty_outline() {
        let empty: [&str; 0] = [];
        assert_eq!(Diagram::from_outline(&empty), Err(DiagramError::Empty));
        assert_eq!(Diagram::from_outline(&["", "  "]), Err(DiagramError::Empty));
    }

    #[test]
    fn test_malformed_outlines() {
        assert_eq!(
            Diagram::from_outline(&["root", "   odd"]),
            Err(DiagramError::OddIndent { line: 2 })
        );
        assert_eq!(
            Diagram::from_outline(&["root", "    too deep"]),
            Err(DiagramError::IndentJump { line: 2 })
        );
        assert_eq!(
            Diagram::from_outline(&["  indented root"]),
            Err(DiagramError::IndentJump { line: 1 })
        );
        assert_eq!(
            Diagram::from_outline(&["root", "  child", "second root"]),
            Err(DiagramError::MultipleRoots { line: 3 })
        );
    }
}
