// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Whether a step applies its windowing or passes everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BypassMode {
    #[default]
    Active,
    /// Set by an enclosing traversal context that must not apply the limit.
    Bypassed,
}

impl BypassMode {
    pub const fn from_flag(bypass: bool) -> Self {
        if bypass {
            Self::Bypassed
        } else {
            Self::Active
        }
    }

    pub const fn is_bypassed(self) -> bool {
        matches!(self, Self::Bypassed)
    }
}

/// Steps whose windowing can be switched off by the owning traversal.
pub trait Bypassing {
    /// When `true`, every subsequent pull passes upstream traversers through
    /// unmodified until the flag is cleared again.
    fn set_bypass(&mut self, bypass: bool);

    fn bypass_mode(&self) -> BypassMode;
}
