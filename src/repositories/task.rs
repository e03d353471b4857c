//! Task repository for database operations.

use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{bookmark, task, todo};
use crate::store::Task;

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Get all tasks ordered by order index.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<task::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find().order_by_asc(task::Column::OrderIndex).all(conn).await?)
    }

    /// Make the table match `tasks`, dropping the lists of removed tasks.
    pub async fn replace_all<C>(conn: &C, tasks: &[Task]) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let keep: Vec<Uuid> = tasks.iter().map(|task| task.id).collect();

        bookmark::Entity::delete_many()
            .filter(bookmark::Column::TaskUuid.is_not_in(keep.clone()))
            .exec(conn)
            .await?;
        todo::Entity::delete_many()
            .filter(todo::Column::TaskUuid.is_not_in(keep.clone()))
            .exec(conn)
            .await?;
        task::Entity::delete_many()
            .filter(task::Column::Uuid.is_not_in(keep))
            .exec(conn)
            .await?;

        for (order_index, task) in tasks.iter().enumerate() {
            let model = task::ActiveModel {
                uuid: ActiveValue::Set(task.id),
                title: ActiveValue::Set(task.title.clone()),
                order_index: ActiveValue::Set(order_index as i32),
            };

            task::Entity::insert(model)
                .on_conflict(
                    OnConflict::column(task::Column::Uuid)
                        .update_columns([task::Column::Title, task::Column::OrderIndex])
                        .to_owned(),
                )
                .exec(conn)
                .await?;
        }

        Ok(())
    }

    pub fn to_record(model: task::Model) -> Task {
        Task {
            id: model.uuid,
            title: model.title,
        }
    }
}
