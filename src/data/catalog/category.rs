use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionSession, TransactionTrait,
};

use super::CatalogRepository;
use crate::{
    error::catalog::CatalogError,
    model::{
        db::{CategoryModel, ChildCategoryModel},
        record::CategoryDescriptor,
    },
};

impl<'a, C: ConnectionTrait + TransactionTrait> CatalogRepository<'a, C> {
    /// Get a category using the descriptor's name
    ///
    /// Category identity is by name only, the parent is not part of the lookup. When several
    /// categories share a name the oldest one wins.
    pub async fn find_category(
        &self,
        category: &CategoryDescriptor,
    ) -> Result<Option<CategoryModel>, CatalogError> {
        self.find_category_by_name(&category.name).await
    }

    /// Create a category, along with its parent and the hierarchy link when the descriptor
    /// names one
    ///
    /// An existing parent category is reused. Runs in a single transaction, on failure
    /// neither the parent, the category nor the link are persisted.
    pub async fn add_category(
        &self,
        category: &CategoryDescriptor,
    ) -> Result<CategoryModel, CatalogError> {
        let txn = self.db.begin().await?;
        let scoped = CatalogRepository::new(&txn);

        let parent = match category.parent_name() {
            Some(parent) => Some(match scoped.find_category_by_name(parent).await? {
                Some(existing) => existing,
                None => scoped.insert_category(parent).await?,
            }),
            None => None,
        };

        let child = scoped.insert_category(&category.name).await?;

        if let Some(parent) = parent {
            scoped.link_child_category(&parent, &child).await?;
        }

        txn.commit().await?;

        Ok(child)
    }

    /// Get the hierarchy link between two categories
    pub async fn find_child_category_link(
        &self,
        parent: &CategoryModel,
        child: &CategoryModel,
    ) -> Result<Option<ChildCategoryModel>, CatalogError> {
        Ok(
            entity::prelude::ChildCategory::find_by_id((parent.id, child.id))
                .one(self.db)
                .await?,
        )
    }

    async fn find_category_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CategoryModel>, CatalogError> {
        Ok(entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(name))
            .order_by_asc(entity::category::Column::Id)
            .one(self.db)
            .await?)
    }

    async fn insert_category(&self, name: &str) -> Result<CategoryModel, CatalogError> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        category
            .insert(self.db)
            .await
            .map_err(|err| CatalogError::from_insert(err, "category", name))
    }

    async fn link_child_category(
        &self,
        parent: &CategoryModel,
        child: &CategoryModel,
    ) -> Result<ChildCategoryModel, CatalogError> {
        let link = entity::child_category::ActiveModel {
            parent_category_id: ActiveValue::Set(parent.id),
            child_category_id: ActiveValue::Set(child.id),
        };

        link.insert(self.db).await.map_err(|err| {
            CatalogError::from_insert(
                err,
                "child category",
                format!("{} > {}", parent.name, child.name),
            )
        })
    }

    /// Number of stored categories
    pub async fn count_categories(&self) -> Result<u64, CatalogError> {
        Ok(entity::prelude::Category::find().count(self.db).await?)
    }
}
