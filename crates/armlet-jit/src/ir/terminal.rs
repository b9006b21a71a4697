use armlet_types::Cond;

use super::location::LocationDescriptor;

/// How control leaves a [`MicroBlock`](super::MicroBlock) once its body has
/// been evaluated. Every block carries exactly one of these; a backend walks
/// the tree by depth-first case analysis and the leaves dictate the actual
/// transfer of control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MicroTerminal {
    /// Return control to the dispatcher.
    ReturnToDispatch,
    /// Try to resume from the top of the return stack buffer. A backend may
    /// realize this as `ReturnToDispatch`.
    PopRsbHint,
    /// Defer execution from `next` onwards to the interpreter.
    Interpret { next: LocationDescriptor },
    /// Tail-chain to the block at `next` if the cycle budget allows.
    LinkBlock { next: LocationDescriptor },
    /// Tail-chain to the block at `next` unconditionally.
    LinkBlockFast { next: LocationDescriptor },
    /// Evaluate `cond` against the runtime flags and dispatch to one of the
    /// sub-terminals.
    If {
        cond: Cond,
        then_: Box<MicroTerminal>,
        else_: Box<MicroTerminal>,
    },
}

impl MicroTerminal {
    /// Convenience constructor boxing both arms of an [`MicroTerminal::If`].
    #[must_use]
    pub fn if_(cond: Cond, then_: MicroTerminal, else_: MicroTerminal) -> Self {
        MicroTerminal::If {
            cond,
            then_: Box::new(then_),
            else_: Box::new(else_),
        }
    }
}
