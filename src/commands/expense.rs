//! Commands over expense claims.

use crate::error::{EngineError, EngineResult, RecordKind};
use crate::models::{Expense, Record};
use crate::query::ExpensePredicate;
use crate::state::Model;
use crate::store::ExpenseList;

use super::messages::{MESSAGE_EXPENSES_ALREADY_EMPTY, MESSAGE_EXPENSES_CLEARED};
use super::{CommandResult, Index};

pub(super) fn add_expense(model: &mut Model, expense: Expense) -> EngineResult<CommandResult> {
    if model.find_person(&expense.employee_id).is_none() {
        return Err(EngineError::RecordNotFound {
            kind: RecordKind::Person,
            key: expense.employee_id.to_string(),
        });
    }
    let summary = format!("New expense added: {} ({})", expense.identity(), expense.amount);
    model.add_expense(expense)?;
    model.commit_expense_list();
    Ok(CommandResult::new(summary, 1))
}

pub(super) fn delete_expense(model: &mut Model, index: Index) -> EngineResult<CommandResult> {
    let target = model
        .expense_view()
        .item(index.zero_based())
        .cloned()
        .ok_or_else(|| index.invalid(RecordKind::Expense))?;
    let removed = model.delete_expense(&target)?;
    model.commit_expense_list();
    Ok(CommandResult::new(
        format!("Deleted Expense: {}", removed.identity()),
        1,
    ))
}

pub(super) fn clear_expenses(model: &mut Model) -> EngineResult<CommandResult> {
    model.update_filtered_expense_list(ExpensePredicate::all(), None);
    let cleared = model.expenses().len();
    if cleared == 0 {
        return Err(EngineError::no_effect(MESSAGE_EXPENSES_ALREADY_EMPTY));
    }
    model.reset_expense_list_data(ExpenseList::new());
    model.commit_expense_list();
    Ok(CommandResult::new(MESSAGE_EXPENSES_CLEARED, cleared))
}
