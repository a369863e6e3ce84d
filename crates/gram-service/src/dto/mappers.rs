//! Entity to DTO mappers

use gram_core::entities::{Comment, Creator, Image, Like};

use super::responses::{CommentResponse, CreatorResponse, ImageResponse, LikeResponse};

impl From<&Creator> for CreatorResponse {
    fn from(creator: &Creator) -> Self {
        Self {
            id: creator.id.to_string(),
            username: creator.username.clone(),
            name: creator.name.clone(),
            bio: creator.bio.clone(),
            website: creator.website.clone(),
            profile_image: creator.profile_image.clone(),
            post_count: creator.post_count,
            followers_count: creator.followers_count,
            following_count: creator.following_count,
            created_at: creator.created_at,
        }
    }
}

impl From<Creator> for CreatorResponse {
    fn from(creator: Creator) -> Self {
        Self::from(&creator)
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            image_id: comment.image_id.to_string(),
            creator_id: comment.creator_id.to_string(),
            message: comment.message.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl From<&Like> for LikeResponse {
    fn from(like: &Like) -> Self {
        Self {
            image_id: like.image_id.to_string(),
            creator_id: like.creator_id.to_string(),
            created_at: like.created_at,
        }
    }
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self::from(&like)
    }
}

/// Image together with its comments, oldest comment first
#[derive(Debug, Clone)]
pub struct ImageWithComments {
    pub image: Image,
    pub comments: Vec<Comment>,
}

impl ImageWithComments {
    pub fn new(image: Image, comments: Vec<Comment>) -> Self {
        Self { image, comments }
    }

    /// Distribute a flat comment list over the images it belongs to.
    ///
    /// Image order is preserved; comments keep their relative order.
    pub fn group(images: Vec<Image>, comments: Vec<Comment>) -> Vec<Self> {
        let mut grouped: Vec<Self> = images.into_iter().map(|i| Self::new(i, Vec::new())).collect();
        for comment in comments {
            if let Some(entry) = grouped.iter_mut().find(|e| e.image.id == comment.image_id) {
                entry.comments.push(comment);
            }
        }
        grouped
    }
}

impl From<&Image> for ImageResponse {
    fn from(image: &Image) -> Self {
        Self {
            id: image.id.to_string(),
            creator_id: image.creator_id.to_string(),
            file: image.file.clone(),
            caption: image.caption.clone(),
            tags: image.tags.clone(),
            like_count: image.like_count,
            created_at: image.created_at,
            updated_at: image.updated_at,
            comments: Vec::new(),
        }
    }
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self::from(&image)
    }
}

impl From<ImageWithComments> for ImageResponse {
    fn from(data: ImageWithComments) -> Self {
        let mut response = Self::from(&data.image);
        response.comments = data.comments.iter().map(CommentResponse::from).collect();
        response
    }
}
