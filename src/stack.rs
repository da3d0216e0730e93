use log::warn;

use crate::constants::STACK_SIZE;
use crate::state::{CriticalError, State};

/// # Stack
/// The call stack holds up to 16 return addresses. `sp` counts occupied slots.
///
/// These are the only functions that touch `stack` or `sp`.
impl State {
    /// Pushes a return address.
    /// A full stack records `StackOverflow` and leaves the stack untouched.
    pub fn push_stack(&mut self, addr: u16) {
        if self.sp as usize == STACK_SIZE {
            warn!("stack overflow pushing {:#06X}; push dropped", addr);
            self.critical_error = CriticalError::StackOverflow;
            return;
        }
        self.stack[self.sp as usize] = addr;
        self.sp += 1;
    }

    /// Pops the most recent return address.
    /// An empty stack records `StackUnderflow` and yields nothing.
    pub fn pop_stack(&mut self) -> Option<u16> {
        if self.sp == 0 {
            warn!("stack underflow");
            self.critical_error = CriticalError::StackUnderflow;
            return None;
        }
        self.sp -= 1;
        Some(self.stack[self.sp as usize])
    }
}
