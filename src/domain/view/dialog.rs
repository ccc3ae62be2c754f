//! Creation dialog and contribution form

use crate::domain::codec::AmountCodec;
use crate::domain::contract::{ContributionRequest, CreatePoolRequest};
use crate::domain::pool::{NewPoolDraft, PoolId, PoolViewState};
use crate::shared::errors::{AppError, CodecError, PoolError};
use crate::shared::types::RawValue;

/// State of the "create a new savings goal" dialog. The draft lives only
/// while the dialog is open.
#[derive(Debug, Clone, Default)]
pub struct CreatePoolDialog {
    open: bool,
    submitting: bool,
    draft: NewPoolDraft,
    error: Option<String>,
}

impl CreatePoolDialog {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and discard the draft. Ignored while a submission is pending.
    pub fn close(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.open = false;
        self.draft = NewPoolDraft::default();
        self.error = None;
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> &NewPoolDraft {
        &self.draft
    }

    /// Editable draft, available only while the dialog is open.
    pub fn draft_mut(&mut self) -> Option<&mut NewPoolDraft> {
        self.open.then_some(&mut self.draft)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the draft and mark the dialog as submitting.
    pub fn begin_submit(
        &mut self,
        codec: &AmountCodec,
        recipient: impl Into<RawValue>,
    ) -> Result<CreatePoolRequest, AppError> {
        if !self.open {
            return Err(PoolError::InvalidDraft("the creation dialog is closed".to_string()).into());
        }
        if self.submitting {
            return Err(PoolError::AlreadySubmitting.into());
        }
        match self.draft.to_request(codec, recipient) {
            Ok(request) => {
                self.submitting = true;
                self.error = None;
                Ok(request)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// On success the draft is discarded and the dialog closes. On failure
    /// the draft is kept so it can be resubmitted.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.close();
            }
            Err(message) => self.error = Some(message),
        }
    }
}

/// Amount field of the contribute action on a fetched pool.
#[derive(Debug, Clone, Default)]
pub struct ContributeForm {
    amount: String,
    submitting: bool,
    error: Option<String>,
}

impl ContributeForm {
    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.to_string();
        self.error = None;
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_valid(&self, codec: &AmountCodec) -> bool {
        PoolViewState::amount_valid(codec, &self.amount)
    }

    /// Convert the entered amount to base units for `pool_id`. An invalid
    /// amount is reported on the form and nothing is submitted.
    pub fn begin_submit(
        &mut self,
        pool_id: PoolId,
        codec: &AmountCodec,
    ) -> Result<ContributionRequest, AppError> {
        if self.submitting {
            return Err(PoolError::AlreadySubmitting.into());
        }
        let amount = match codec.to_base_units(&self.amount) {
            Ok(amount) if !amount.is_zero() => amount,
            Ok(_) => {
                let err = CodecError::InvalidAmount(
                    "contribution must be greater than zero".to_string(),
                );
                self.error = Some(err.to_string());
                return Err(err.into());
            }
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(err.into());
            }
        };
        self.submitting = true;
        self.error = None;
        Ok(ContributionRequest { pool_id, amount })
    }

    /// On success the field is cleared. On failure the amount is kept.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.submitting = false;
        match outcome {
            Ok(()) => self.amount.clear(),
            Err(message) => self.error = Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;

    fn filled_dialog() -> CreatePoolDialog {
        let mut dialog = CreatePoolDialog::default();
        dialog.open();
        let draft = dialog.draft_mut().unwrap();
        draft.title = "Road trip".to_string();
        draft.description = "Gas and snacks".to_string();
        draft.target = "250".to_string();
        dialog
    }

    #[test]
    fn test_draft_only_editable_while_open() {
        let mut dialog = CreatePoolDialog::default();
        assert!(dialog.draft_mut().is_none());
        dialog.open();
        assert!(dialog.draft_mut().is_some());
    }

    #[test]
    fn test_close_discards_draft() {
        let mut dialog = filled_dialog();
        assert!(dialog.close());
        assert!(!dialog.is_open());
        assert_eq!(dialog.draft(), &NewPoolDraft::default());
    }

    #[test]
    fn test_successful_submit_resets_and_closes() {
        let codec = AmountCodec::default();
        let mut dialog = filled_dialog();
        let request = dialog.begin_submit(&codec, "0x1").unwrap();
        assert_eq!(request.description, "Gas and snacks");
        assert!(dialog.is_submitting());
        assert!(!dialog.close(), "close is ignored while submitting");

        dialog.finish_submit(Ok(()));
        assert!(!dialog.is_submitting());
        assert!(!dialog.is_open());
        assert_eq!(dialog.draft(), &NewPoolDraft::default());
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let codec = AmountCodec::default();
        let mut dialog = filled_dialog();
        dialog.begin_submit(&codec, "0x1").unwrap();
        dialog.finish_submit(Err("Contract call failed: rejected".to_string()));

        assert!(dialog.is_open());
        assert!(!dialog.is_submitting());
        assert_eq!(dialog.draft().target, "250");
        assert_eq!(dialog.error(), Some("Contract call failed: rejected"));
    }

    #[test]
    fn test_submit_requires_open_dialog() {
        let codec = AmountCodec::default();
        let mut dialog = CreatePoolDialog::default();
        assert!(dialog.begin_submit(&codec, "0x1").is_err());
        assert!(!dialog.is_submitting());
    }

    #[test]
    fn test_invalid_draft_sets_error() {
        let codec = AmountCodec::default();
        let mut dialog = filled_dialog();
        dialog.draft_mut().unwrap().target = "five hundred".to_string();
        assert!(dialog.begin_submit(&codec, "0x1").is_err());
        assert!(!dialog.is_submitting());
        assert!(dialog.error().unwrap().starts_with("Invalid amount"));
    }

    #[test]
    fn test_contribute_converts_exactly() {
        let codec = AmountCodec::default();
        let mut form = ContributeForm::default();
        form.set_amount("1.5");
        assert!(form.is_valid(&codec));

        let request = form.begin_submit(PoolId(4), &codec).unwrap();
        assert_eq!(request.pool_id, PoolId(4));
        assert_eq!(request.amount, U256::from(1_500_000_000_000_000_000u64));
        assert!(form.is_submitting());
        assert!(form.begin_submit(PoolId(4), &codec).is_err());

        form.finish_submit(Ok(()));
        assert_eq!(form.amount(), "");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_contribute_rejects_invalid_amounts() {
        let codec = AmountCodec::default();
        let mut form = ContributeForm::default();
        for amount in ["", "abc", "-2", "0"] {
            form.set_amount(amount);
            assert!(!form.is_valid(&codec));
            assert!(form.begin_submit(PoolId(1), &codec).is_err());
            assert!(form.error().is_some());
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn test_contribute_failure_keeps_amount() {
        let codec = AmountCodec::default();
        let mut form = ContributeForm::default();
        form.set_amount("3");
        form.begin_submit(PoolId(1), &codec).unwrap();
        form.finish_submit(Err("boom".to_string()));
        assert_eq!(form.amount(), "3");
        assert_eq!(form.error(), Some("boom"));
    }
}
