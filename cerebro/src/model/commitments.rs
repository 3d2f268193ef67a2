use cerebro_api::endpoints::{
    commitments::{Commitment, CommitmentKind, CommitmentStatus, CommitmentUpdate},
    Amount,
};

/// The update that flips a commitment between pending and paid.
pub fn toggled(commitment: &Commitment) -> CommitmentUpdate {
    match commitment.status {
        CommitmentStatus::Pending => CommitmentUpdate {
            status: CommitmentStatus::Paid,
            paid_amount: commitment.total_amount,
        },
        CommitmentStatus::Paid => CommitmentUpdate {
            status: CommitmentStatus::Pending,
            paid_amount: Amount::ZERO,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    InFavor,
    Against,
    Even,
}

impl Standing {
    pub fn label(&self) -> &'static str {
        match self {
            Standing::InFavor => "In favor",
            Standing::Against => "Against",
            Standing::Even => "Even",
        }
    }
}

/// Pending totals per kind, plus the net balance between them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CommitmentSummary {
    pub debt_total: Amount,
    pub debt_count: usize,
    pub loan_total: Amount,
    pub loan_count: usize,
}

impl CommitmentSummary {
    pub fn from_commitments(commitments: &[Commitment]) -> Self {
        commitments
            .iter()
            .filter(|c| !c.is_paid())
            .fold(Self::default(), |mut summary, c| {
                match c.kind {
                    CommitmentKind::Debt => {
                        summary.debt_total += c.remaining();
                        summary.debt_count += 1;
                    }
                    CommitmentKind::Loan => {
                        summary.loan_total += c.remaining();
                        summary.loan_count += 1;
                    }
                }
                summary
            })
    }

    /// Loans minus debts.
    pub fn balance(&self) -> Amount {
        self.loan_total - self.debt_total
    }

    pub fn standing(&self) -> Standing {
        let balance = self.balance();
        if balance.is_positive() {
            Standing::InFavor
        } else if balance.is_negative() {
            Standing::Against
        } else {
            Standing::Even
        }
    }
}
