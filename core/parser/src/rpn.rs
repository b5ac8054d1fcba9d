//! FILENAME: core/parser/src/rpn.rs
//! PURPOSE: Defines the postfix (Reverse Polish) form of an expression.
//! CONTEXT: The shunting-yard converter emits a `Postfix` sequence and the
//! evaluator walks it left to right with a value stack. Once an item is
//! appended it is never reordered.
//!
//! SUPPORTED ITEMS:
//! - Numeric literals (kept as text until evaluation)
//! - Binary operations: +, -, *, /
//! - Prefix sign operations: +, - (e.g. -5, 2*-3)

/// Precedence of a prefix sign; binds tighter than any binary operator.
pub const UNARY_PRECEDENCE: u8 = 3;

/// Binary operators supported by the calculator.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// `+ -` bind at 1, `* /` at 2. All four are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }
}

/// Prefix sign operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Plus,
    Negate,
}

impl UnaryOperator {
    pub fn symbol(self) -> char {
        match self {
            UnaryOperator::Plus => '+',
            UnaryOperator::Negate => '-',
        }
    }
}

/// A single entry of the postfix sequence.
#[derive(Debug, PartialEq, Clone)]
pub enum RpnItem {
    Number(String),
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

impl std::fmt::Display for RpnItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RpnItem::Number(n) => write!(f, "{}", n),
            RpnItem::Binary(op) => write!(f, "{}", op.symbol()),
            // 'u' prefix keeps "5 u-" distinct from binary subtraction
            RpnItem::Unary(op) => write!(f, "u{}", op.symbol()),
        }
    }
}

/// An expression in postfix order, ready for stack evaluation.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Postfix {
    items: Vec<RpnItem>,
}

impl Postfix {
    pub fn new() -> Self {
        Postfix { items: Vec::new() }
    }

    pub fn push(&mut self, item: RpnItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[RpnItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RpnItem> {
        self.items.iter()
    }
}

impl From<Vec<RpnItem>> for Postfix {
    fn from(items: Vec<RpnItem>) -> Self {
        Postfix { items }
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a RpnItem;
    type IntoIter = std::slice::Iter<'a, RpnItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Space separated, e.g. `2 3 4 1 - * +`.
impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
