//! Todo repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::todo;
use crate::store::Todo;

/// Repository for todo-related database operations.
pub struct TodoRepository;

impl TodoRepository {
    /// Get the todos of one task in list order.
    pub async fn get_for_task<C>(conn: &C, task_uuid: &Uuid) -> Result<Vec<todo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(todo::Entity::find()
            .filter(todo::Column::TaskUuid.eq(*task_uuid))
            .order_by_asc(todo::Column::OrderIndex)
            .all(conn)
            .await?)
    }

    /// Replace the todos of one task with `todos`, in order.
    pub async fn replace_for_task<C>(conn: &C, task_uuid: &Uuid, todos: &[Todo]) -> Result<()>
    where
        C: ConnectionTrait,
    {
        todo::Entity::delete_many()
            .filter(todo::Column::TaskUuid.eq(*task_uuid))
            .exec(conn)
            .await?;

        for (order_index, entry) in todos.iter().enumerate() {
            let model = todo::ActiveModel {
                uuid: ActiveValue::Set(entry.id),
                task_uuid: ActiveValue::Set(*task_uuid),
                text: ActiveValue::Set(entry.text.clone()),
                is_completed: ActiveValue::Set(entry.is_completed),
                ident: ActiveValue::Set(entry.ident as i32),
                order_index: ActiveValue::Set(order_index as i32),
            };
            todo::Entity::insert(model).exec(conn).await?;
        }

        Ok(())
    }

    pub fn to_record(model: todo::Model) -> Todo {
        Todo {
            id: model.uuid,
            text: model.text,
            is_completed: model.is_completed,
            ident: model.ident.max(0) as u32,
        }
    }
}
