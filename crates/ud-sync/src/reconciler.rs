//! Sync reconciler - keeps the local user cache in step with the remote directory.
//!
//! ## Refresh policy
//!
//! With [`RefreshPolicy::WhenEmpty`] the remote directory is only consulted
//! while the cache is empty. The first successful fetch is written with
//! insert-or-replace on the remote id; from then on the cache is returned
//! as-is and later remote changes are never observed.
//!
//! With [`RefreshPolicy::Always`] every call fetches. Unknown emails are
//! inserted, known emails get their name and avatar refreshed, and the
//! device-owned columns (national id, status) are kept.
//!
//! Either way a failed fetch is not fatal: the cached list is returned with
//! [`ReconcileOrigin::CacheFallback`] and the caller decides what to show.
//!
//! Nothing here locks the store. Two concurrent calls against an empty cache
//! may both fetch and both write.

use crate::{SyncError, SyncResult};

use ud_client::{RemoteDirectory, RemoteUser};
use ud_config::{RefreshPolicy, SyncConfig};
use ud_core::{ProfileForm, UserRecord};
use ud_db::UserRepository;

use std::sync::Arc;

use log::{debug, error, info, warn};
use serde::Serialize;

/// Where the returned list came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReconcileOrigin {
    /// Local store returned without contacting the remote
    Cache,
    /// Remote fetch succeeded and was merged before reading back
    Remote,
    /// Remote fetch failed; local contents returned unchanged
    CacheFallback { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Reconciled {
    pub users: Vec<UserRecord>,
    pub origin: ReconcileOrigin,
}

impl Reconciled {
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }
}

pub struct SyncReconciler {
    users: UserRepository,
    remote: Arc<dyn RemoteDirectory>,
    policy: RefreshPolicy,
    pages: u32,
}

impl SyncReconciler {
    pub fn new(users: UserRepository, remote: Arc<dyn RemoteDirectory>, config: &SyncConfig) -> Self {
        Self {
            users,
            remote,
            policy: config.refresh_policy,
            pages: config.pages.max(1),
        }
    }

    /// Produce the list to display, refreshing from the remote as the policy allows.
    pub async fn reconcile(&self) -> SyncResult<Reconciled> {
        let local = self.users.find_all().await.inspect_err(|e| {
            error!("Failed to read local users: {}", e);
        })?;

        if self.policy == RefreshPolicy::WhenEmpty && !local.is_empty() {
            debug!("Serving {} cached users", local.len());
            return Ok(Reconciled {
                users: local,
                origin: ReconcileOrigin::Cache,
            });
        }

        let remote_users = match self.fetch_remote().await {
            Ok(users) => users,
            Err(e) => {
                warn!(
                    "Remote fetch failed, serving {} cached users: {}",
                    local.len(),
                    e
                );
                return Ok(Reconciled {
                    users: local,
                    origin: ReconcileOrigin::CacheFallback {
                        reason: e.to_string(),
                    },
                });
            }
        };

        match self.policy {
            RefreshPolicy::WhenEmpty => self.bootstrap(&remote_users).await?,
            RefreshPolicy::Always => self.merge(&remote_users).await?,
        }

        let users = self.users.find_all().await?;
        info!(
            "Reconciled {} remote users, {} users cached",
            remote_users.len(),
            users.len()
        );

        Ok(Reconciled {
            users,
            origin: ReconcileOrigin::Remote,
        })
    }

    /// Fetch up to `pages` pages, stopping early at the last one.
    async fn fetch_remote(&self) -> SyncResult<Vec<RemoteUser>> {
        let mut collected = Vec::new();

        for page_number in 1..=self.pages {
            let page = self.remote.list_users(page_number).await?;
            let is_last = page.is_last();
            collected.extend(page.data);

            if is_last {
                break;
            }
        }

        Ok(collected)
    }

    /// First fill of an empty cache: insert-or-replace by remote id.
    async fn bootstrap(&self, remote_users: &[RemoteUser]) -> SyncResult<()> {
        for user in remote_users {
            self.users.upsert(&user.to_record()).await?;
        }
        Ok(())
    }

    /// Merge keyed by email, leaving device-owned columns alone.
    async fn merge(&self, remote_users: &[RemoteUser]) -> SyncResult<()> {
        for user in remote_users {
            self.merge_one(user).await?;
        }
        Ok(())
    }

    /// A remote id already held by another local row is not reused.
    async fn merge_one(&self, user: &RemoteUser) -> SyncResult<()> {
        let record = user.to_record();
        if !self.users.insert_if_email_absent(&record).await? {
            self.users.refresh_profile(&record).await?;
        }
        Ok(())
    }

    /// Set the status flag of one user.
    pub async fn toggle_status(&self, id: i64, active: bool) -> SyncResult<()> {
        let updated = self.users.set_active(id, active).await.inspect_err(|e| {
            error!("Failed to change status of user {}: {}", id, e);
        })?;

        if !updated {
            return Err(SyncError::not_found(id));
        }

        info!("User {} is now {}", id, if active { "active" } else { "inactive" });
        Ok(())
    }

    pub async fn find(&self, id: i64) -> SyncResult<Option<UserRecord>> {
        Ok(self.users.find_by_id(id).await?)
    }

    /// Create (`id == None`) or update a user from the profile form.
    ///
    /// Emails stay unique among records written through here.
    pub async fn save_profile(&self, id: Option<i64>, form: &ProfileForm) -> SyncResult<UserRecord> {
        form.validate()?;

        let email = form.email.trim();
        let existing = self.users.find_by_email(email).await?;
        if existing.is_some_and(|u| u.id != id) {
            return Err(SyncError::duplicate_email(email));
        }

        match id {
            Some(id) => {
                let mut record = self
                    .users
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| SyncError::not_found(id))?;
                form.apply_to(&mut record);
                self.users.update(&record).await?;
                info!("Updated user {}", id);
                Ok(record)
            }
            None => {
                let mut record = form.to_record();
                let new_id = self.users.upsert(&record).await?;
                record.id = Some(new_id);
                info!("Created user {}", new_id);
                Ok(record)
            }
        }
    }

    pub async fn delete(&self, id: i64) -> SyncResult<()> {
        if !self.users.delete(id).await? {
            return Err(SyncError::not_found(id));
        }
        info!("Deleted user {}", id);
        Ok(())
    }

    /// Pull one user from `GET /users/{id}` and merge it by email.
    pub async fn refresh_user(&self, id: i64) -> SyncResult<UserRecord> {
        let remote_user = self.remote.get_user(id).await?;
        self.merge_one(&remote_user).await?;

        self.users
            .find_by_email(&remote_user.email)
            .await?
            .ok_or_else(|| SyncError::not_found(id))
    }
}
