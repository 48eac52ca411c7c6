//! Seeding workflow: users, then categories, then products

use chrono::Utc;
use common::models::NewCategory;
use common::validation::{validate_product, validate_user};
use common::{CatalogClient, ClientError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SeederConfig;
use crate::error::{SeedError, SeedResult};
use crate::generator::Generator;
use crate::report::{Bootstrap, ProductOutcome, SeedReport};

/// Ids resolved or created by a bootstrap step
#[derive(Debug, Clone, Default)]
pub struct Resolved {
    pub ids: Vec<i64>,
    pub counts: Bootstrap,
}

/// Populates the catalog API with synthetic data
pub struct Seeder {
    client: CatalogClient,
    config: SeederConfig,
    generator: Generator<StdRng>,
}

impl Seeder {
    /// Create a new seeder
    pub fn new(client: CatalogClient, config: SeederConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            client,
            config,
            generator: Generator::new(rng),
        }
    }

    /// Run every step and report what happened
    pub async fn run(&mut self) -> SeedResult<SeedReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(%run_id, "Seeding {}", self.client.base_url());

        let users = self.ensure_users().await?;
        let categories = self.ensure_categories().await?;
        let products = self.seed_products(&users.ids, &categories.ids).await?;

        Ok(SeedReport {
            run_id,
            base_url: self.client.base_url().to_string(),
            started_at,
            finished_at: Utc::now(),
            users: users.counts,
            categories: categories.counts,
            products,
        })
    }

    /// Make sure at least `min_users` users exist.
    ///
    /// Creates exactly the missing number. Failed creations are retried with
    /// a fresh user; only failures count against the bootstrap ceiling.
    pub async fn ensure_users(&mut self) -> SeedResult<Resolved> {
        let mut ids = self.user_ids().await?;

        let existing = ids.len() as u32;
        let wanted = self.config.min_users;
        info!("Found {} users, {} required", existing, wanted);

        let mut created = 0;
        let mut unresolved = 0;
        let mut failures = 0;
        while existing + created < wanted {
            if failures >= self.config.max_bootstrap_attempts {
                return Err(SeedError::Bootstrap {
                    wanted,
                    have: existing + created,
                    failures,
                });
            }

            let user = self.generator.user();
            if let Err(reason) = validate_user(&user) {
                warn!("Skipping invalid synthetic user {}: {}", user.email, reason);
                failures += 1;
                continue;
            }

            match self.client.create_user(&user).await {
                Ok(saved) => {
                    debug!("Created user {} ({})", saved.id, user.email);
                    ids.push(saved.id);
                    created += 1;
                }
                // The server accepted the user but its reply has no usable id
                Err(ClientError::Decode(e)) => {
                    warn!("Created user {} but could not read the response: {}", user.email, e);
                    created += 1;
                    unresolved += 1;
                }
                Err(e) => {
                    warn!("Failed to create user {}: {}", user.email, e);
                    failures += 1;
                }
            }
        }

        if unresolved > 0 {
            debug!("Listing users again to resolve {} ids", unresolved);
            ids = self.user_ids().await?;
        }
        if ids.is_empty() {
            return Err(SeedError::NoUsers);
        }

        let counts = Bootstrap { existing, created };
        info!(
            "Users ready: {} in total, {} existing, {} created",
            counts.total(),
            existing,
            created
        );
        Ok(Resolved { ids, counts })
    }

    async fn user_ids(&self) -> SeedResult<Vec<i64>> {
        let users = self.client.list_users().await?.into_items();
        Ok(users.into_iter().map(|user| user.id).collect())
    }

    /// Make sure every configured category exists, creating only the
    /// names the server does not already have
    pub async fn ensure_categories(&mut self) -> SeedResult<Resolved> {
        let categories = self.client.list_categories().await?.into_items();
        let existing = categories.len() as u32;

        let mut known: HashSet<String> = HashSet::new();
        let mut ids = Vec::with_capacity(categories.len() + self.config.categories.len());
        for category in categories {
            known.insert(category.name);
            ids.push(category.id);
        }

        let mut created = 0;
        let mut unresolved = false;
        for name in &self.config.categories {
            let name = name.trim();
            if name.is_empty() || !known.insert(name.to_string()) {
                debug!("Category {} already present", name);
                continue;
            }

            let payload = NewCategory {
                name: name.to_string(),
                description: self.config.category_description.clone(),
            };
            match self.client.create_category(&payload).await {
                Ok(category) => {
                    debug!("Created category {} ({})", category.id, category.name);
                    ids.push(category.id);
                    created += 1;
                }
                Err(ClientError::Decode(e)) => {
                    warn!("Created category {} but could not read the response: {}", name, e);
                    created += 1;
                    unresolved = true;
                }
                Err(e) => warn!("Failed to create category {}: {}", name, e),
            }
        }

        if unresolved {
            debug!("Listing categories again to resolve new ids");
            let categories = self.client.list_categories().await?.into_items();
            ids = categories.into_iter().map(|category| category.id).collect();
        }
        if ids.is_empty() {
            return Err(SeedError::NoCategories);
        }

        let counts = Bootstrap { existing, created };
        info!(
            "Categories ready: {} in total, {} existing, {} created",
            counts.total(),
            existing,
            created
        );
        Ok(Resolved { ids, counts })
    }

    /// Create products until the target is reached or the attempt budget
    /// runs out. Failed attempts are tallied and retried with fresh data.
    pub async fn seed_products(
        &mut self,
        user_ids: &[i64],
        category_ids: &[i64],
    ) -> SeedResult<ProductOutcome> {
        if user_ids.is_empty() {
            return Err(SeedError::NoUsers);
        }
        if category_ids.is_empty() {
            return Err(SeedError::NoCategories);
        }
        let category_ids = distinct(category_ids);

        let mut outcome =
            ProductOutcome::new(self.config.target_products, self.config.max_attempts);
        info!(
            "Inserting up to {} products ({} attempts allowed)",
            outcome.target, outcome.max_attempts
        );

        while outcome.keep_going() {
            outcome.attempts += 1;

            let Some(product) = self.generator.product(user_ids, &category_ids) else {
                break;
            };
            if let Err(reason) = validate_product(&product) {
                debug!("Skipping invalid product {:?}: {}", product.name, reason);
                outcome.invalid_payloads += 1;
                continue;
            }

            match self.client.create_product(&product).await {
                Ok(_) => {
                    outcome.created += 1;
                    let every = self.config.progress_every;
                    if every > 0 && outcome.created % every == 0 {
                        info!("{} products created", outcome.created);
                    }
                }
                Err(ClientError::Status { status, .. }) => {
                    debug!("Product {:?} rejected with {}", product.name, status);
                    outcome.record_rejection(status.as_u16());
                }
                Err(e) => {
                    warn!("Product request failed: {}", e);
                    outcome.transport_errors += 1;
                }
            }
        }

        outcome.finish();
        if outcome.exhausted {
            warn!(
                "Stopped after {} attempts with {} of {} products created",
                outcome.attempts, outcome.created, outcome.target
            );
        } else {
            info!(
                "Created {} products in {} attempts",
                outcome.created, outcome.attempts
            );
        }

        Ok(outcome)
    }
}

fn distinct(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
