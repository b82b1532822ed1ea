/// Raw result code returned by the platform empty operation.
pub type ResultCode = i32;

/// `S_OK`.
const CODE_SUCCESS: ResultCode = 0;

/// `E_UNEXPECTED`, reported by the shell when the bin is already empty.
const CODE_ALREADY_EMPTY: ResultCode = 0x8000_FFFF_u32 as i32;

/// Outcome of an action against an external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// The action succeeded.
    Success,
    /// The action failed with the given raw code.
    Failure(ResultCode),
}

impl ActionResult {
    /// Code reported by platforms that have nothing to empty.
    pub const ALREADY_EMPTY: ResultCode = CODE_ALREADY_EMPTY;

    /// Code reported on plain success.
    pub const SUCCESS: ResultCode = CODE_SUCCESS;

    /// Whether this is [`ActionResult::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, ActionResult::Success)
    }
}

/// Classify the code returned by an empty request.
///
/// Success and "already empty" both count as success.
pub fn classify_empty_code(code: ResultCode) -> ActionResult {
    match code {
        CODE_SUCCESS | CODE_ALREADY_EMPTY => ActionResult::Success,
        other => ActionResult::Failure(other),
    }
}
