//! Find-or-create for the entities a product depends on.
//!
//! Brands, categories and images all resolve the same way: look the entity up by its
//! natural key and create it only when it is missing. [`Resolvable`] captures the two
//! halves per entity kind and [`resolve_or_create`] runs them.

use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::{
    data::catalog::CatalogRepository,
    error::catalog::CatalogError,
    model::{
        db::{BrandModel, CategoryModel, ImageModel},
        record::{CategoryDescriptor, ImageRef},
    },
};

/// An entity resolved against the catalog, with the number of rows created for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<M> {
    pub model: M,
    /// Zero when the entity already existed. A category created together with its parent
    /// counts two.
    pub created: u64,
}

impl<M> Resolved<M> {
    fn existing(model: M) -> Self {
        Self { model, created: 0 }
    }
}

/// A descriptor that can be resolved to a stored entity.
#[allow(async_fn_in_trait)]
pub trait Resolvable {
    type Model;

    async fn find<C>(
        &self,
        repo: &CatalogRepository<'_, C>,
    ) -> Result<Option<Self::Model>, CatalogError>
    where
        C: ConnectionTrait + TransactionTrait;

    async fn create<C>(
        &self,
        repo: &CatalogRepository<'_, C>,
    ) -> Result<Resolved<Self::Model>, CatalogError>
    where
        C: ConnectionTrait + TransactionTrait;
}

/// Returns the stored entity for `descriptor`, creating it when it does not exist yet.
pub async fn resolve_or_create<R, C>(
    repo: &CatalogRepository<'_, C>,
    descriptor: &R,
) -> Result<Resolved<R::Model>, CatalogError>
where
    R: Resolvable,
    C: ConnectionTrait + TransactionTrait,
{
    if let Some(model) = descriptor.find(repo).await? {
        return Ok(Resolved::existing(model));
    }

    descriptor.create(repo).await
}

/// A brand, identified by its name.
#[derive(Clone, Copy, Debug)]
pub struct BrandName<'a>(pub &'a str);

impl Resolvable for BrandName<'_> {
    type Model = BrandModel;

    async fn find<C>(
        &self,
        repo: &CatalogRepository<'_, C>,
    ) -> Result<Option<BrandModel>, CatalogError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        repo.find_brand(self.0).await
    }

    async fn create<C>(
        &self,
        repo: &CatalogRepository<'_, C>,
    ) -> Result<Resolved<BrandModel>, CatalogError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        Ok(Resolved {
            model: repo.add_brand(self.0).await?,
            created: 1,
        })
    }
}

impl Resolvable for CategoryDescriptor {
    type Model = CategoryModel;

    async fn find<C>(
        &self,
        repo: &CatalogRepository<'_, C>,
    ) -> Result<Option<CategoryModel>, CatalogError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        repo.find_category(self).await
    }

    async fn create<C>(
        &self,
        repo: &CatalogRepository<'_, C>,
    ) -> Result<Resolved<CategoryModel>, CatalogError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let parent_created = match self.parent_name() {
            Some(parent) => {
                let parent = CategoryDescriptor {
                    name: parent.to_string(),
                    parent: None,
                };
                u64::from(repo.find_category(&parent).await?.is_none())
            }
            None => 0,
        };

        Ok(Resolved {
            model: repo.add_category(self).await?,
            created: 1 + parent_created,
        })
    }
}

impl Resolvable for ImageRef {
    type Model = ImageModel;

    async fn find<C>(
        &self,
        repo: &CatalogRepository<'_, C>,
    ) -> Result<Option<ImageModel>, CatalogError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        repo.find_image(self).await
    }

    async fn create<C>(
        &self,
        repo: &CatalogRepository<'_, C>,
    ) -> Result<Resolved<ImageModel>, CatalogError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        Ok(Resolved {
            model: repo.add_image(self).await?,
            created: 1,
        })
    }
}
