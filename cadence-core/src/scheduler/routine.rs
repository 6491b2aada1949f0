//! Step tree arena and sequencing strategies
//!
//! A [`Routine`] owns every step of one composite action as an arena of
//! nodes addressed by stable [`StepId`]s. Sequence nodes hold ordered
//! lists of child ids and run them either one-at-a-time (linear) or
//! all-at-once (concurrent). The harness advances the root once per
//! cycle until it reports completion.
//!
//! `StepId` is deliberately not `Clone`: attaching a child consumes its
//! id, so every step has exactly one parent and the ownership graph is a
//! tree by construction.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use super::step::{Step, TickCount};

/// Stable handle to a step in a [`Routine`].
///
/// Obtained from [`Routine::action`] or [`Routine::sequence`] and
/// consumed when the step is attached to a parent.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct StepId(usize);

/// How a sequence runs its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SequenceKind {
    /// One child at a time, in insertion order.
    Linear,
    /// All children every cycle; done when all are done.
    Concurrent,
}

enum Node<'a> {
    /// Placeholder while a node is temporarily taken out for advancing.
    Vacant,
    /// A leaf action.
    Action(Box<dyn Step + 'a>),
    /// A composite of child steps.
    Sequence {
        kind: SequenceKind,
        children: Vec<StepId>,
        /// Index of the active child (linear only).
        cursor: usize,
        ticks: TickCount,
    },
}

/// A tree of steps advanced cooperatively from its root.
///
/// The root is a sequence created by [`linear`](Routine::linear) or
/// [`concurrent`](Routine::concurrent); further steps are inserted with
/// [`action`](Routine::action)/[`sequence`](Routine::sequence) and wired
/// up with [`attach`](Routine::attach) or [`push`](Routine::push) before
/// the first call to [`advance`](Routine::advance).
pub struct Routine<'a> {
    nodes: Vec<Node<'a>>,
    complete: bool,
}

const ROOT: usize = 0;

impl<'a> Routine<'a> {
    /// Create a routine whose root runs its children one at a time.
    pub fn linear() -> Self {
        Self::with_root(SequenceKind::Linear)
    }

    /// Create a routine whose root runs all children every cycle.
    pub fn concurrent() -> Self {
        Self::with_root(SequenceKind::Concurrent)
    }

    fn with_root(kind: SequenceKind) -> Self {
        Self {
            nodes: vec![Node::Sequence {
                kind,
                children: Vec::new(),
                cursor: 0,
                ticks: TickCount::new(),
            }],
            complete: false,
        }
    }

    /// Insert a leaf action; returns its id, not yet attached to anything.
    pub fn action(&mut self, step: impl Step + 'a) -> StepId {
        self.nodes.push(Node::Action(Box::new(step)));
        StepId(self.nodes.len() - 1)
    }

    /// Insert an empty sequence; returns its id, not yet attached.
    pub fn sequence(&mut self, kind: SequenceKind) -> StepId {
        self.nodes.push(Node::Sequence {
            kind,
            children: Vec::new(),
            cursor: 0,
            ticks: TickCount::new(),
        });
        StepId(self.nodes.len() - 1)
    }

    /// Append `child` to a sequence, consuming its id.
    ///
    /// Children must be attached before the routine is first advanced;
    /// attaching to a leaf action is a caller error.
    pub fn attach(&mut self, parent: &StepId, child: StepId) {
        match &mut self.nodes[parent.0] {
            Node::Sequence { children, .. } => children.push(child),
            _ => panic!("attach target is not a sequence"),
        }
    }

    /// Append `child` to the root sequence.
    pub fn push(&mut self, child: StepId) {
        match &mut self.nodes[ROOT] {
            Node::Sequence { children, .. } => children.push(child),
            _ => unreachable!("root is always a sequence"),
        }
    }

    /// Run the next time-slice of the tree; true when the root is done.
    ///
    /// Call once per cycle until it returns true. Re-advancing after the
    /// first true return is not part of the harness contract, though the
    /// terminal-idempotence requirement on steps keeps it harmless.
    pub fn advance(&mut self) -> bool {
        let done = self.advance_at(ROOT);
        self.complete = done;
        done
    }

    /// Whether a previous [`advance`](Routine::advance) reported done.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of cycles delivered to the root so far.
    pub fn cycles(&self) -> u32 {
        match &self.nodes[ROOT] {
            Node::Sequence { ticks, .. } => ticks.count(),
            _ => unreachable!("root is always a sequence"),
        }
    }

    fn advance_at(&mut self, index: usize) -> bool {
        // Take the node out of its slot so children can be advanced
        // through `self` while it is borrowed. Child ids never alias the
        // taken slot because the ownership graph is a tree.
        let mut node = mem::replace(&mut self.nodes[index], Node::Vacant);

        let done = match &mut node {
            Node::Vacant => true,
            Node::Action(step) => step.advance(),
            Node::Sequence {
                kind: SequenceKind::Linear,
                children,
                cursor,
                ticks,
            } => {
                ticks.advance();
                if let Some(child) = children.get(*cursor) {
                    // Tick only the active child; when it finishes, move
                    // the cursor on the same cycle so no idle cycle is
                    // spent between children.
                    if self.advance_at(child.0) {
                        *cursor += 1;
                    }
                }
                *cursor >= children.len()
            }
            Node::Sequence {
                kind: SequenceKind::Concurrent,
                children,
                ticks,
                ..
            } => {
                ticks.advance();
                // Every child is advanced every cycle, including ones
                // that already finished; done means ALL are done now.
                let mut done = true;
                for child in children.iter() {
                    done &= self.advance_at(child.0);
                }
                done
            }
        };

        self.nodes[index] = node;
        done
    }
}
