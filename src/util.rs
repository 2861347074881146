//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! candidate digits.

use crate::error::{SudokuError, SudokuResult};
use crate::{MAX_DIGIT, MIN_DIGIT};

use std::iter::FromIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask. Each
/// digit is represented by one bit in a `u16`. This generally has better
/// performance than a `HashSet` and is `Copy`.
///
/// # Example
///
/// ```
/// use sudoku_classic::util::DigitSet;
///
/// let mut set = DigitSet::empty();
/// set.insert(3).unwrap();
/// set.insert(7).unwrap();
///
/// assert!(set.contains(3));
/// assert!(!set.contains(4));
/// assert_eq!(vec![3, 7], set.iter().collect::<Vec<_>>());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DigitSet {
    content: u16
}

const FULL_CONTENT: u16 = 0b11_1111_1110;

fn check_digit(digit: u8) -> SudokuResult<()> {
    if digit < MIN_DIGIT || digit > MAX_DIGIT {
        Err(SudokuError::InvalidDigit)
    }
    else {
        Ok(())
    }
}

impl DigitSet {

    /// Creates a new, empty digit set.
    pub fn empty() -> DigitSet {
        DigitSet {
            content: 0
        }
    }

    /// Creates a new digit set that contains all digits from 1 to 9.
    pub fn full() -> DigitSet {
        DigitSet {
            content: FULL_CONTENT
        }
    }

    /// Creates a new digit set that contains only the given digit.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidDigit` is returned.
    pub fn singleton(digit: u8) -> SudokuResult<DigitSet> {
        check_digit(digit)?;
        Ok(DigitSet {
            content: 1 << digit
        })
    }

    /// Indicates whether the given digit is contained in this set. Digits
    /// outside the range `[1, 9]` are never contained.
    pub fn contains(&self, digit: u8) -> bool {
        if digit < MIN_DIGIT || digit > MAX_DIGIT {
            false
        }
        else {
            self.content & (1 << digit) != 0
        }
    }

    /// Inserts the given digit into this set, such that
    /// [DigitSet::contains] returns `true` for it afterwards. Returns `true`
    /// if the set changed, that is, the digit was not contained before.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidDigit` is returned.
    pub fn insert(&mut self, digit: u8) -> SudokuResult<bool> {
        check_digit(digit)?;
        let mask = 1 << digit;
        let changed = self.content & mask == 0;
        self.content |= mask;
        Ok(changed)
    }

    /// Removes the given digit from this set, such that
    /// [DigitSet::contains] returns `false` for it afterwards. Returns `true`
    /// if the set changed, that is, the digit was contained before.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidDigit` is returned.
    pub fn remove(&mut self, digit: u8) -> SudokuResult<bool> {
        check_digit(digit)?;
        let mask = 1 << digit;
        let changed = self.content & mask != 0;
        self.content &= !mask;
        Ok(changed)
    }

    /// Gets the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.content.count_ones() as usize
    }

    /// Indicates whether this set contains no digits.
    pub fn is_empty(&self) -> bool {
        self.content == 0
    }

    /// Returns an iterator over the digits in this set in ascending order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            content: self.content
        }
    }
}

/// An iterator over the digits of a [DigitSet] in ascending order.
pub struct DigitSetIter {
    content: u16
}

impl Iterator for DigitSetIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.content == 0 {
            None
        }
        else {
            let digit = self.content.trailing_zeros() as u8;
            self.content &= self.content - 1;
            Some(digit)
        }
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> DigitSetIter {
        self.iter()
    }
}

impl IntoIterator for &DigitSet {
    type Item = u8;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> DigitSetIter {
        self.iter()
    }
}

impl FromIterator<u8> for DigitSet {

    /// Collects all digits yielded by the iterator into a digit set. Digits
    /// outside the range `[1, 9]` are ignored.
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> DigitSet {
        let mut set = DigitSet::empty();

        for digit in iter {
            if digit >= MIN_DIGIT && digit <= MAX_DIGIT {
                set.content |= 1 << digit;
            }
        }

        set
    }
}

impl BitAnd for DigitSet {
    type Output = DigitSet;

    /// Intersects this set with the given set, yielding a set which contains
    /// all digits contained in both operands.
    fn bitand(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            content: self.content & rhs.content
        }
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: DigitSet) {
        self.content &= rhs.content;
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    /// Unifies this set with the given set, yielding a set which contains all
    /// digits contained in either operand.
    fn bitor(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            content: self.content | rhs.content
        }
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: DigitSet) {
        self.content |= rhs.content;
    }
}

impl Sub for DigitSet {
    type Output = DigitSet;

    /// Subtracts the given set from this set, yielding a set which contains
    /// all digits contained in the left- but not the right-hand operand.
    fn sub(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            content: self.content & !rhs.content
        }
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: DigitSet) {
        self.content &= !rhs.content;
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn empty_set_contains_nothing() {
        let set = DigitSet::empty();

        assert!(set.is_empty());
        assert_eq!(0, set.len());

        for digit in 1..=9 {
            assert!(!set.contains(digit));
        }
    }

    #[test]
    fn full_set_contains_all_digits() {
        let set = DigitSet::full();

        assert!(!set.is_empty());
        assert_eq!(9, set.len());

        for digit in 1..=9 {
            assert!(set.contains(digit));
        }
    }

    #[test]
    fn insertion_changes_containment() {
        let mut set = DigitSet::empty();

        assert!(set.insert(5).unwrap());
        assert!(!set.insert(5).unwrap());

        assert!(set.contains(5));
        assert!(!set.contains(4));
        assert_eq!(1, set.len());
    }

    #[test]
    fn removal_changes_containment() {
        let mut set = DigitSet::full();

        assert!(set.remove(1).unwrap());
        assert!(!set.remove(1).unwrap());

        assert!(!set.contains(1));
        assert_eq!(8, set.len());
    }

    #[test]
    fn out_of_range_digits_rejected() {
        let mut set = DigitSet::empty();

        assert_eq!(Err(SudokuError::InvalidDigit), set.insert(0));
        assert_eq!(Err(SudokuError::InvalidDigit), set.insert(10));
        assert_eq!(Err(SudokuError::InvalidDigit), set.remove(0));
        assert_eq!(Err(SudokuError::InvalidDigit), DigitSet::singleton(10));
        assert!(!set.contains(0));
        assert!(!set.contains(10));
    }

    #[test]
    fn iteration_is_ascending() {
        let set: DigitSet = vec![9u8, 2, 6, 2].into_iter().collect();

        assert_eq!(vec![2, 6, 9], set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn set_operators() {
        let a: DigitSet = vec![1u8, 2, 3].into_iter().collect();
        let b: DigitSet = vec![2u8, 3, 4].into_iter().collect();

        assert_eq!(vec![2, 3], (a & b).iter().collect::<Vec<_>>());
        assert_eq!(vec![1, 2, 3, 4], (a | b).iter().collect::<Vec<_>>());
        assert_eq!(vec![1], (a - b).iter().collect::<Vec<_>>());
    }
}
