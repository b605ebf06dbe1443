
use super::error::StackError;

/// LIFO stack used by the evaluator for pending values and pending
/// operators. Implemented as a vector whose "top" is at the end.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::NotEnoughElements { expected, actual: self.len() })
    } else {
      Ok(())
    }
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Pops the top two elements, returned in the order they were
  /// pushed: `(second_from_top, top)`. In case of a [`StackError`],
  /// `self` will NOT be modified.
  pub fn pop_pair(&mut self) -> Result<(T, T), StackError> {
    self.check_stack_size(2)?;
    // unwrap: We checked the stack size already
    let top = self.elements.pop().unwrap();
    let below = self.elements.pop().unwrap();
    Ok((below, top))
  }

  /// The element at the top of the stack, if any.
  pub fn peek(&self) -> Option<&T> {
    self.elements.last()
  }

  /// Consumes the stack, returning its only element. Fails if the
  /// stack holds anything other than exactly one element.
  pub fn into_single(mut self) -> Result<T, StackError> {
    match self.elements.len() {
      1 => self.pop(),
      0 => Err(StackError::NotEnoughElements { expected: 1, actual: 0 }),
      n => Err(StackError::TooManyElements { expected: 1, actual: n }),
    }
  }

  fn len(&self) -> usize {
    self.elements.len()
  }

}

/// Converts a vector to a stack, where the top of the stack is at the
/// end.
#[cfg(test)]
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(16),
    }
  }

}
