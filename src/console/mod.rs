//! Client-side state for the admin console.
//!
//! [`ProductConsole`] owns the fetched collection, the create form and the two
//! modal dialogs. Each action issues at most one request and waits for it;
//! local state only changes once the service has answered.

pub mod client;
pub mod dialog;
pub mod error;
pub mod form;
pub mod listing;

use uuid::Uuid;

use crate::models::Product;
use client::{ListFilters, ProductClient};
use dialog::{DeleteAction, DeleteDialog, EditAction, EditDialog};
use error::{ConsoleError, ConsoleResult};
use form::ProductDraft;
use listing::{DateWindow, ProductCard, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient, dismissible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub struct ProductConsole {
    client: ProductClient,
    session: Session,
    pub filters: ListFilters,
    pub window: DateWindow,
    pub create_form: ProductDraft,
    products: Vec<Product>,
    delete_dialog: DeleteDialog,
    edit_dialog: EditDialog,
    notice: Option<Notice>,
}

impl ProductConsole {
    pub fn new(client: ProductClient, session: Session) -> Self {
        Self {
            client,
            session,
            filters: ListFilters::default(),
            window: DateWindow::default(),
            create_form: ProductDraft::default(),
            products: Vec::new(),
            delete_dialog: DeleteDialog::default(),
            edit_dialog: EditDialog::default(),
            notice: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cards(&self) -> Vec<ProductCard<'_>> {
        listing::cards(&self.products, &self.window, &self.session)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn delete_dialog(&self) -> &DeleteDialog {
        &self.delete_dialog
    }

    pub fn edit_dialog(&self) -> &EditDialog {
        &self.edit_dialog
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut ProductDraft> {
        self.edit_dialog.draft_mut()
    }

    /// Reload the collection with the current server-side filters.
    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        match self.client.list(&self.filters).await {
            Ok(products) => {
                self.products = products;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Submit the create form. A form failing the local gate never reaches the service.
    pub async fn submit_create(&mut self) -> ConsoleResult<Product> {
        if let Err(err) = self.create_form.validate_for_create() {
            return Err(self.fail(err));
        }
        let (input, file) = match self.create_form.to_submission() {
            Ok(parts) => parts,
            Err(err) => return Err(self.fail(err)),
        };

        let product = match self.client.create(&input, file).await {
            Ok(product) => product,
            Err(err) => return Err(self.fail(err)),
        };
        self.create_form = ProductDraft::default();
        self.products.push(product.clone());
        self.succeed("Product added");
        self.reload_after_write().await;
        Ok(product)
    }

    pub fn open_delete(&mut self, id: Uuid) -> ConsoleResult<()> {
        let product = self.controllable(id)?;
        self.delete_dialog.apply(DeleteAction::Open(product))
    }

    pub fn cancel_delete(&mut self) -> ConsoleResult<()> {
        self.delete_dialog.apply(DeleteAction::Cancel)
    }

    /// Accept the confirmation prompt and issue the delete.
    pub async fn confirm_delete(&mut self) -> ConsoleResult<Product> {
        self.delete_dialog.apply(DeleteAction::Confirm)?;
        let id = match self.delete_dialog.target() {
            Some(product) => product.id,
            None => return Err(ConsoleError::InvalidTransition("confirm delete")),
        };

        match self.client.delete(id).await {
            Ok(deleted) => {
                self.delete_dialog.apply(DeleteAction::Succeeded)?;
                self.products.retain(|p| p.id != deleted.id);
                self.succeed("Product deleted");
                self.reload_after_write().await;
                Ok(deleted)
            }
            Err(err) => {
                self.delete_dialog.apply(DeleteAction::Failed)?;
                Err(self.fail(err))
            }
        }
    }

    pub fn open_edit(&mut self, id: Uuid) -> ConsoleResult<()> {
        let product = self.controllable(id)?;
        self.edit_dialog.apply(EditAction::Open(product))
    }

    pub fn cancel_edit(&mut self) -> ConsoleResult<()> {
        self.edit_dialog.apply(EditAction::Cancel)
    }

    /// Send the full field set back; the returned record replaces the local one.
    pub async fn save_edit(&mut self) -> ConsoleResult<Product> {
        self.edit_dialog.apply(EditAction::Save)?;
        let (id, submission) = match self.edit_dialog.saving() {
            Some((id, draft)) => (id, draft.to_submission()),
            None => return Err(ConsoleError::InvalidTransition("save edit")),
        };
        let (input, file) = match submission {
            Ok(parts) => parts,
            Err(err) => {
                self.edit_dialog.apply(EditAction::SaveFailed)?;
                return Err(self.fail(err));
            }
        };

        match self.client.update(id, &input, file).await {
            Ok(updated) => {
                self.edit_dialog.apply(EditAction::SaveSucceeded)?;
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == updated.id) {
                    *slot = updated.clone();
                }
                self.succeed("Product updated");
                Ok(updated)
            }
            Err(err) => {
                self.edit_dialog.apply(EditAction::SaveFailed)?;
                Err(self.fail(err))
            }
        }
    }

    /// Re-fetch after a saved write. The write already succeeded, so a failed
    /// reload keeps the locally patched collection and the success notice.
    async fn reload_after_write(&mut self) {
        match self.client.list(&self.filters).await {
            Ok(products) => self.products = products,
            Err(err) => tracing::warn!(error = %err, "reload after write failed"),
        }
    }

    /// Edit and delete controls are disabled for non-admin sessions.
    fn controllable(&self, id: Uuid) -> ConsoleResult<Product> {
        if !self.session.is_admin() {
            return Err(ConsoleError::InvalidTransition("controls disabled for this role"));
        }
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ConsoleError::NotFound)
    }

    fn succeed(&mut self, message: &str) {
        self.notice = Some(Notice {
            kind: NoticeKind::Success,
            message: message.to_string(),
        });
    }

    fn fail(&mut self, err: ConsoleError) -> ConsoleError {
        tracing::warn!(error = %err, "console action failed");
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            message: err.to_string(),
        });
        err
    }
}
