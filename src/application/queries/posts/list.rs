use super::PostQueryService;
use crate::{
    application::{
        dto::{PageRequest, PostDto, PostPageDto},
        error::ApplicationResult,
    },
    domain::user::UserId,
};

pub struct ListPostsQuery {
    pub page: u32,
    pub page_size: u32,
}

pub struct ListPostsByAuthorQuery {
    pub author_id: i64,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PostPageDto> {
        let PageRequest { page, page_size } = PageRequest::new(query.page, query.page_size);
        let (records, total) = self.read_repo.list(page, page_size).await?;

        Ok(PostPageDto {
            items: records.into_iter().map(Into::into).collect(),
            total,
            page,
            page_size,
        })
    }

    pub async fn list_posts_by_author(
        &self,
        query: ListPostsByAuthorQuery,
    ) -> ApplicationResult<Vec<PostDto>> {
        let author_id = UserId::new(query.author_id)?;
        let records = self.read_repo.list_by_author(author_id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
