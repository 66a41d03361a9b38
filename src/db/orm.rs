//! sea-orm backend. Ids come from SQLite's rowid auto-increment.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use todo_schema::Todo;
use tracing::{error, info, warn};

use crate::config::StorageBackend;
use crate::db::models::NewTodo;
use crate::db::repository::TodoRepository;
use crate::error::StoreError;

pub mod todo {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "todo")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub description: String,
        pub completed: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<todo::Model> for Todo {
    fn from(model: todo::Model) -> Self {
        Todo {
            id: model.id,
            description: model.description,
            completed: model.completed,
        }
    }
}

#[derive(Clone)]
pub struct OrmTodoRepository {
    db: DatabaseConnection,
}

impl OrmTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for OrmTodoRepository {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Orm
    }

    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        info!("Fetching all Todo items.");
        let models = todo::Entity::find()
            .order_by_asc(todo::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Todo::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Option<Todo> {
        info!(id, "Fetching Todo item.");
        match todo::Entity::find_by_id(id).one(&self.db).await {
            Ok(model) => model.map(Todo::from),
            Err(e) => {
                error!(id, error = %e, "Error fetching Todo item; treating as absent.");
                None
            }
        }
    }

    async fn save(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        info!("Saving a new Todo item.");
        let active = todo::ActiveModel {
            id: NotSet,
            description: Set(todo.description),
            completed: Set(todo.completed),
        };
        let model = active.insert(&self.db).await?;

        info!(id = model.id, "Todo item saved.");
        Ok(model.into())
    }

    async fn update_by_id(&self, todo: Todo) -> Result<Option<Todo>, StoreError> {
        info!(id = todo.id, "Updating Todo item.");
        let changes = todo::ActiveModel {
            id: NotSet,
            description: Set(todo.description.clone()),
            completed: Set(todo.completed),
        };
        let res = todo::Entity::update_many()
            .set(changes)
            .filter(todo::Column::Id.eq(todo.id))
            .exec(&self.db)
            .await?;

        if res.rows_affected == 1 {
            info!(id = todo.id, "Todo item updated.");
            Ok(Some(todo))
        } else {
            warn!(id = todo.id, affected = res.rows_affected, "Failed to update Todo item.");
            Ok(None)
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        info!(id, "Deleting Todo item.");
        todo::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let exists = todo::Entity::find_by_id(id).one(&self.db).await?.is_some();
        if !exists {
            warn!(id, "Todo item does not exist.");
        }
        Ok(exists)
    }

    async fn get_max_id(&self) -> Result<i64, StoreError> {
        let last = todo::Entity::find()
            .order_by_desc(todo::Column::Id)
            .one(&self.db)
            .await?;
        Ok(last.map_or(0, |m| m.id))
    }
}
