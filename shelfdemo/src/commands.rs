use crate::{Commands, ProductArgs, ViewConfig};
use shelf_core::{
    ProductCache, SyncOutcome,
    models::{ProductEntry, ProductId, ProductRecord},
    ports::{RemoteStore, SeedSource},
};
use tracing::{Level, event};

impl ProductArgs {
    fn into_record(self) -> ProductRecord {
        self.fields.into_iter().fold(
            ProductRecord::new(self.category, self.rating),
            |record, (key, value)| record.with_detail(key, value),
        )
    }
}

impl Commands {
    /// Run the command against an initialized cache.
    ///
    /// # Returns
    ///
    /// The products to display: the query result for read-only commands, the
    /// whole cache after a mutation.
    ///
    /// # Errors
    ///
    /// Fails if the store rejected a mutation. The cache keeps whatever state
    /// its consistency contract dictates (an added product stays cached).
    pub async fn evaluate<S: RemoteStore, D: SeedSource>(
        self,
        cache: &mut ProductCache<S, D>,
        views: &ViewConfig,
    ) -> anyhow::Result<Vec<ProductEntry>> {
        let selected = match self {
            Commands::List => cache.products().iter().collect(),
            Commands::View { view } => view.select(cache, views),
            Commands::Category { name } => cache.filter_by_category(&name),
            Commands::Rating { min } => cache.filter_by_rating(min),
            Commands::Add { id, product } => {
                let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
                let entry = ProductEntry::new(id, product.into_record());
                cache.add_product(entry).outcome().await?;
                cache.products().iter().collect()
            }
            Commands::Update { id, product } => {
                let id = ProductId::from(id);
                let entry = ProductEntry::new(id.clone(), product.into_record());
                report(&id, cache.update_product(&id, entry).await)?;
                cache.products().iter().collect()
            }
            Commands::Delete { id } => {
                let id = ProductId::from(id);
                report(&id, cache.delete_product(&id).await)?;
                cache.products().iter().collect()
            }
        };

        Ok(selected.into_iter().cloned().collect())
    }
}

fn report(id: &ProductId, outcome: SyncOutcome) -> anyhow::Result<()> {
    match outcome {
        SyncOutcome::Applied => Ok(()),
        SyncOutcome::NotCached => {
            event!(Level::WARN, id = id.as_str(), "no cached product with this id");
            Ok(())
        }
        SyncOutcome::RemoteFailed(err) => Err(err.into()),
    }
}
