//! Bookmark repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::bookmark;
use crate::store::Bookmark;

/// Repository for bookmark-related database operations.
pub struct BookmarkRepository;

impl BookmarkRepository {
    /// Get the bookmarks of one task in list order.
    pub async fn get_for_task<C>(conn: &C, task_uuid: &Uuid) -> Result<Vec<bookmark::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(bookmark::Entity::find()
            .filter(bookmark::Column::TaskUuid.eq(*task_uuid))
            .order_by_asc(bookmark::Column::OrderIndex)
            .all(conn)
            .await?)
    }

    /// Replace the bookmarks of one task with `bookmarks`, in order.
    pub async fn replace_for_task<C>(conn: &C, task_uuid: &Uuid, bookmarks: &[Bookmark]) -> Result<()>
    where
        C: ConnectionTrait,
    {
        bookmark::Entity::delete_many()
            .filter(bookmark::Column::TaskUuid.eq(*task_uuid))
            .exec(conn)
            .await?;

        for (order_index, entry) in bookmarks.iter().enumerate() {
            let model = bookmark::ActiveModel {
                uuid: ActiveValue::Set(entry.id),
                task_uuid: ActiveValue::Set(*task_uuid),
                uri: ActiveValue::Set(entry.uri.clone()),
                order_index: ActiveValue::Set(order_index as i32),
            };
            bookmark::Entity::insert(model).exec(conn).await?;
        }

        Ok(())
    }

    pub fn to_record(model: bookmark::Model) -> Bookmark {
        Bookmark {
            id: model.uuid,
            uri: model.uri,
            auto_focus: false,
        }
    }
}
