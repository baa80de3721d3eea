//! Modal dialog state machines for the delete and edit flows.
//!
//! Only one product's dialog may be open at a time. Every transition goes
//! through `apply`; actions that do not fit the current state are rejected and
//! leave the state unchanged.

use uuid::Uuid;

use crate::{
    console::{
        error::{ConsoleError, ConsoleResult},
        form::ProductDraft,
    },
    models::Product,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Confirming(Product),
    Deleting(Product),
}

#[derive(Debug, Clone)]
pub enum DeleteAction {
    Open(Product),
    Confirm,
    Cancel,
    Succeeded,
    Failed,
}

impl DeleteDialog {
    pub fn apply(&mut self, action: DeleteAction) -> ConsoleResult<()> {
        let next = match (std::mem::take(self), action) {
            (DeleteDialog::Closed, DeleteAction::Open(product)) => DeleteDialog::Confirming(product),
            (DeleteDialog::Confirming(product), DeleteAction::Confirm) => {
                DeleteDialog::Deleting(product)
            }
            (DeleteDialog::Confirming(_), DeleteAction::Cancel) => DeleteDialog::Closed,
            (DeleteDialog::Deleting(_), DeleteAction::Succeeded) => DeleteDialog::Closed,
            (DeleteDialog::Deleting(product), DeleteAction::Failed) => {
                DeleteDialog::Confirming(product)
            }
            (current, action) => {
                *self = current;
                return Err(ConsoleError::InvalidTransition(delete_label(&action)));
            }
        };
        *self = next;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DeleteDialog::Closed)
    }

    /// The product the dialog was opened for.
    pub fn target(&self) -> Option<&Product> {
        match self {
            DeleteDialog::Closed => None,
            DeleteDialog::Confirming(product) | DeleteDialog::Deleting(product) => Some(product),
        }
    }
}

fn delete_label(action: &DeleteAction) -> &'static str {
    match action {
        DeleteAction::Open(_) => "open delete dialog",
        DeleteAction::Confirm => "confirm delete",
        DeleteAction::Cancel => "cancel delete",
        DeleteAction::Succeeded => "finish delete",
        DeleteAction::Failed => "fail delete",
    }
}

#[derive(Debug, Clone, Default)]
pub enum EditDialog {
    #[default]
    Closed,
    Editing { id: Uuid, draft: ProductDraft },
    Saving { id: Uuid, draft: ProductDraft },
}

#[derive(Debug, Clone)]
pub enum EditAction {
    Open(Product),
    Save,
    Cancel,
    SaveSucceeded,
    SaveFailed,
}

impl EditDialog {
    pub fn apply(&mut self, action: EditAction) -> ConsoleResult<()> {
        let next = match (std::mem::take(self), action) {
            (EditDialog::Closed, EditAction::Open(product)) => EditDialog::Editing {
                id: product.id,
                draft: ProductDraft::from_product(&product),
            },
            (EditDialog::Editing { id, draft }, EditAction::Save) => EditDialog::Saving { id, draft },
            (EditDialog::Editing { .. }, EditAction::Cancel) => EditDialog::Closed,
            (EditDialog::Saving { .. }, EditAction::SaveSucceeded) => EditDialog::Closed,
            (EditDialog::Saving { id, draft }, EditAction::SaveFailed) => {
                EditDialog::Editing { id, draft }
            }
            (current, action) => {
                *self = current;
                return Err(ConsoleError::InvalidTransition(edit_label(&action)));
            }
        };
        *self = next;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditDialog::Closed)
    }

    /// Draft fields are only editable while the dialog is in `Editing`.
    pub fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        match self {
            EditDialog::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn saving(&self) -> Option<(Uuid, &ProductDraft)> {
        match self {
            EditDialog::Saving { id, draft } => Some((*id, draft)),
            _ => None,
        }
    }
}

fn edit_label(action: &EditAction) -> &'static str {
    match action {
        EditAction::Open(_) => "open edit dialog",
        EditAction::Save => "save edit",
        EditAction::Cancel => "cancel edit",
        EditAction::SaveSucceeded => "finish save",
        EditAction::SaveFailed => "fail save",
    }
}
