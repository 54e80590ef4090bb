// Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Storage abstractions used by the iterative algorithms.
//!
//! Iterators such as [`Preorder`][crate::searchtree::Preorder] keep their
//! pending work in a stack. The stack is a type parameter so that callers
//! can hand in (and later take back) preallocated storage when traversing
//! many trees.

/// A LIFO container of items.
pub trait ItemStack<I> {
    /// Return `true` if the stack holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of items on the stack.
    fn len(&self) -> usize;

    /// Remove all items.
    fn clear(&mut self);

    fn push(&mut self, item: I);

    fn pop(&mut self) -> Option<I>;
}

impl<'a, I, S> ItemStack<I> for &'a mut S
where
    S: ItemStack<I>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn push(&mut self, item: I) {
        (**self).push(item)
    }

    fn pop(&mut self) -> Option<I> {
        (**self).pop()
    }
}

impl<I> ItemStack<I> for Vec<I> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn push(&mut self, item: I) {
        Vec::push(self, item)
    }

    fn pop(&mut self) -> Option<I> {
        Vec::pop(self)
    }
}

#[cfg(test)]
mod tests {
    use super::ItemStack;

    fn drain<S: ItemStack<u32>>(mut stack: S) -> Vec<u32> {
        let mut out = vec![];
        while let Some(x) = stack.pop() {
            out.push(x);
        }
        out
    }

    #[test]
    fn test_lifo() {
        let mut stack = Vec::new();
        ItemStack::push(&mut stack, 1);
        ItemStack::push(&mut stack, 2);
        ItemStack::push(&mut stack, 3);
        assert_eq!(ItemStack::len(&stack), 3);
        assert_eq!(drain(&mut stack), vec![3, 2, 1]);
        assert!(ItemStack::is_empty(&stack));
    }
}
