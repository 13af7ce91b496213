//! Reserved words of the surface syntax.
//!
//! The parser recognizes special forms by comparing the leading `Name` of a
//! parenthesized tuple against these pre-interned names, which is a plain
//! u32 comparison with no interner lock.

use crate::{Name, StringInterner};

/// A reserved head keyword of a parenthesized form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SpecialForm {
    Seq,
    If,
    Define,
    Set,
    Declare,
    Fun,
    Record,
}

impl SpecialForm {
    /// All special forms in dispatch order.
    pub const ALL: [SpecialForm; 7] = [
        SpecialForm::Seq,
        SpecialForm::If,
        SpecialForm::Define,
        SpecialForm::Set,
        SpecialForm::Declare,
        SpecialForm::Fun,
        SpecialForm::Record,
    ];

    /// Surface spelling of the keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            SpecialForm::Seq => "seq",
            SpecialForm::If => "if",
            SpecialForm::Define => "define",
            SpecialForm::Set => "set!",
            SpecialForm::Declare => "declare",
            SpecialForm::Fun => "fun",
            SpecialForm::Record => "record",
        }
    }
}

/// Pre-interned names for every reserved word.
#[derive(Clone, Debug)]
pub struct SpecialForms {
    pub seq: Name,
    pub if_: Name,
    pub define: Name,
    pub set: Name,
    pub declare: Name,
    pub fun: Name,
    pub record: Name,
    /// Return-type marker in typed parameter lists: `[-> Type]`.
    pub return_arrow: Name,
    /// Attribute key under which a field's positional type is stored.
    pub type_attr: Name,
}

impl SpecialForms {
    /// Intern all reserved names using the given interner.
    pub fn new(interner: &StringInterner) -> Self {
        SpecialForms {
            seq: interner.intern(SpecialForm::Seq.keyword()),
            if_: interner.intern(SpecialForm::If.keyword()),
            define: interner.intern(SpecialForm::Define.keyword()),
            set: interner.intern(SpecialForm::Set.keyword()),
            declare: interner.intern(SpecialForm::Declare.keyword()),
            fun: interner.intern(SpecialForm::Fun.keyword()),
            record: interner.intern(SpecialForm::Record.keyword()),
            return_arrow: interner.intern("->"),
            type_attr: interner.intern("type"),
        }
    }

    /// Classify a head name, checking forms in dispatch order.
    #[inline]
    pub fn classify(&self, head: Name) -> Option<SpecialForm> {
        if head == self.seq {
            Some(SpecialForm::Seq)
        } else if head == self.if_ {
            Some(SpecialForm::If)
        } else if head == self.define {
            Some(SpecialForm::Define)
        } else if head == self.set {
            Some(SpecialForm::Set)
        } else if head == self.declare {
            Some(SpecialForm::Declare)
        } else if head == self.fun {
            Some(SpecialForm::Fun)
        } else if head == self.record {
            Some(SpecialForm::Record)
        } else {
            None
        }
    }
}
