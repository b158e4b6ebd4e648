use crate::core::{EntityId, NewTopic, Result, Topic, TopicRepository, TopicService};
use async_trait::async_trait;

pub struct TopicServiceImpl<R: TopicRepository> {
    repository: R,
}

impl<R: TopicRepository> TopicServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: TopicRepository> TopicService for TopicServiceImpl<R> {
    async fn create_topic(&self, topic: &NewTopic) -> Result<Topic> {
        self.repository.create_topic(topic).await
    }

    async fn delete_topic(&self, id: EntityId) -> Result<()> {
        self.repository.delete_topic(id).await
    }

    async fn get_all_topics(&self) -> Result<Vec<Topic>> {
        self.repository.get_all_topics().await
    }

    async fn get_topic_by_id(&self, id: EntityId) -> Result<Option<Topic>> {
        self.repository.get_topic_by_id(id).await
    }

    async fn update_topic(&self, topic: &Topic) -> Result<Topic> {
        self.repository.update_topic(topic).await
    }
}
