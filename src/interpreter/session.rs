use tracing::{info, instrument};

use crate::{
    ast::{MAX_DIAGRAM_DEPTH, Tree},
    error::{BuildError, Error, EvalError},
    interpreter::{
        evaluator::core::evaluate,
        parser::core::build,
        traversal::{traverse_inorder, traverse_postorder, traverse_preorder},
        validator::{check_balance, check_characters, strip_whitespace},
    },
    util::num::format_real,
};

/// Everything a presentation layer shows for one submitted expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Inorder traversal, trimmed.
    pub inorder:   String,
    /// Preorder traversal, trimmed.
    pub preorder:  String,
    /// Postorder traversal, trimmed.
    pub postorder: String,
    /// The value of the expression, or why it has none.
    pub outcome:   Result<f64, EvalError>,
}

impl Report {
    /// The outcome as display text: the number, or the error message.
    #[must_use]
    pub fn outcome_text(&self) -> String {
        match &self.outcome {
            Ok(value) => format_real(*value),
            Err(e) => e.to_string(),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Inorder:   {}", self.inorder)?;
        writeln!(f, "Preorder:  {}", self.preorder)?;
        writeln!(f, "Postorder: {}", self.postorder)?;
        write!(f, "Result:    {}", self.outcome_text())
    }
}

/// Coordinates one expression submission after another.
///
/// Holds the most recently built tree. A submission that fails before its
/// tree is built leaves the previous tree in place.
#[derive(Debug, Default)]
pub struct Session {
    tree: Tree,
}

impl Session {
    /// Creates a session with no tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently built tree; empty until a build succeeds.
    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Validates, builds, evaluates and traverses an expression.
    ///
    /// Steps, in order: reject blank input, check characters, check
    /// parentheses, build. The lexer skips whitespace, so every reported
    /// position is a column of `expression` as typed. Once the build succeeds the new
    /// tree replaces the old one; an evaluation failure is reported in
    /// [`Report::outcome`] rather than as an error.
    ///
    /// # Errors
    /// Returns [`Error::Build`] if the expression is rejected or cannot be
    /// built. The session's tree is unchanged in that case.
    ///
    /// # Example
    /// ```
    /// use exprtree::Session;
    ///
    /// let mut session = Session::new();
    /// let report = session.submit("2 + 3 * 4").unwrap();
    ///
    /// assert_eq!(report.preorder, "+  2.0  *  3.0  4.0");
    /// assert_eq!(report.outcome, Ok(14.0));
    /// ```
    #[instrument(level = "debug", skip(self))]
    pub fn submit(&mut self, expression: &str) -> Result<Report, Error> {
        if expression.trim().is_empty() {
            return Err(BuildError::EmptyExpression.into());
        }
        check_characters(expression)?;
        check_balance(expression)?;

        let tree = build(expression)?;

        let report = Report { inorder:   traverse_inorder(&tree).trim().to_string(),
                              preorder:  traverse_preorder(&tree).trim().to_string(),
                              postorder: traverse_postorder(&tree).trim().to_string(),
                              outcome:   evaluate(&tree), };
        self.tree = tree;

        info!(expression = %strip_whitespace(expression), outcome = %report.outcome_text(), "expression submitted");
        Ok(report)
    }

    /// The current tree as a text diagram.
    ///
    /// # Errors
    /// - [`Error::NotBuilt`] if no expression has been built yet.
    /// - [`Error::TooDeepToDraw`] if the tree has more than
    ///   [`MAX_DIAGRAM_DEPTH`] levels.
    pub fn render(&self) -> Result<termtree::Tree<String>, Error> {
        if self.tree.is_empty() {
            return Err(Error::NotBuilt);
        }

        let depth = self.tree.depth();
        if depth > MAX_DIAGRAM_DEPTH {
            return Err(Error::TooDeepToDraw { depth,
                                              limit: MAX_DIAGRAM_DEPTH });
        }
        Ok(self.tree.to_termtree())
    }
}
