//! Create form (POST)

use tracing::{info, warn};

use crate::api::PostsApi;
use crate::error::ApiResult;
use crate::model::{NewPost, Post, DEFAULT_OWNER_ID};
use crate::widgets::Alert;

pub const CREATE_ERROR: &str = "Error: could not create the post.";

/// Two required text fields and the result of the last submission.
#[derive(Debug, Clone)]
pub struct CreateForm {
    title: String,
    body: String,
    owner_id: u64,
    message: Option<Alert>,
    in_flight: bool,
}

impl CreateForm {
    pub fn new(owner_id: u64) -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            owner_id,
            message: None,
            in_flight: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if !self.in_flight {
            self.title = title.into();
        }
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        if !self.in_flight {
            self.body = body.into();
        }
    }

    pub fn message(&self) -> Option<&Alert> {
        self.message.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Both fields are required
    pub fn can_submit(&self) -> bool {
        !self.title.is_empty() && !self.body.is_empty()
    }

    /// Build the request body, or None if the form may not be sent now.
    pub fn begin_submit(&mut self) -> Option<NewPost> {
        if self.in_flight || !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        Some(NewPost::new(self.title.clone(), self.body.clone(), self.owner_id))
    }

    pub fn finish_submit(&mut self, result: ApiResult<Post>) {
        self.in_flight = false;

        match result {
            Ok(created) => {
                info!(id = created.id, "post created");
                self.message = Some(Alert::success(format!(
                    "Post created successfully! ID: {}",
                    created.id
                )));
                self.title.clear();
                self.body.clear();
            }
            Err(err) => {
                warn!(error = %err, "create failed");
                self.message = Some(Alert::danger(CREATE_ERROR));
            }
        }
    }

    /// Submit and settle. Returns whether a request was sent.
    pub async fn submit(&mut self, api: &dyn PostsApi) -> bool {
        let Some(new_post) = self.begin_submit() else {
            return false;
        };
        let result = api.create_post(&new_post).await;
        self.finish_submit(result);
        true
    }
}

impl Default for CreateForm {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER_ID)
    }
}
