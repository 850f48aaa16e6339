//! In-memory ports shared by the catalog service tests.
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::catalog::application::domain::entities::{
    Category, Nutrition, Product, Review, VoteDirection,
};
use crate::catalog::application::ports::outgoing::{
    CatalogQuery, CatalogQueryError, NewReview, ReviewRepository, ReviewRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub product: Product,
    pub active: bool,
}

pub fn category(slug: &str) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: slug.to_uppercase(),
        slug: slug.to_string(),
        description: String::new(),
        image: String::new(),
    }
}

pub fn product(name: &str, category_id: Option<Uuid>) -> CatalogEntry {
    CatalogEntry {
        product: Product {
            id: Uuid::new_v4(),
            category_id,
            name: name.to_string(),
            price: Decimal::new(199, 2),
            rating: 4.0,
            description: format!("{} description", name),
            image: "https://cdn.example.com/p.png".to_string(),
            weight: None,
            origin: None,
            organic: false,
            storage: None,
            nutrition: Nutrition::default(),
        },
        active: true,
    }
}

pub fn review(product_id: Uuid, comment: &str) -> Review {
    Review {
        id: Uuid::new_v4(),
        product_id,
        author: "Jane".to_string(),
        rating: 5,
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        upvotes: 0,
        downvotes: 0,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    categories: Arc<Mutex<Vec<Category>>>,
    products: Arc<Mutex<Vec<CatalogEntry>>>,
    searches: Arc<AtomicUsize>,
}

impl InMemoryCatalog {
    pub fn with(categories: Vec<Category>, products: Vec<CatalogEntry>) -> Self {
        Self {
            categories: Arc::new(Mutex::new(categories)),
            products: Arc::new(Mutex::new(products)),
            searches: Arc::default(),
        }
    }

    pub fn search_calls(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    fn active<F>(&self, keep: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.products
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.active && keep(&e.product))
            .map(|e| e.product.clone())
            .collect()
    }
}

#[async_trait]
impl CatalogQuery for InMemoryCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogQueryError> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn find_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Category>, CatalogQueryError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn list_products(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<Product>, CatalogQueryError> {
        Ok(self.active(|p| category_id.is_none() || p.category_id == category_id))
    }

    async fn search_products(
        &self,
        term: &str,
        limit: u64,
    ) -> Result<Vec<Product>, CatalogQueryError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        let needle = term.to_lowercase();
        let mut found = self.active(|p| p.name.to_lowercase().contains(&needle));
        found.truncate(limit as usize);
        Ok(found)
    }

    async fn find_product(&self, id: Uuid) -> Result<Option<Product>, CatalogQueryError> {
        Ok(self.active(|p| p.id == id).into_iter().next())
    }

    async fn related_products(
        &self,
        category_id: Uuid,
        exclude: Uuid,
        limit: u64,
    ) -> Result<Vec<Product>, CatalogQueryError> {
        let mut found = self.active(|p| p.category_id == Some(category_id) && p.id != exclude);
        found.truncate(limit as usize);
        Ok(found)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryReviews {
    rows: Arc<Mutex<Vec<Review>>>,
}

impl InMemoryReviews {
    pub fn insert(&self, review: Review) {
        self.rows.lock().unwrap().push(review);
    }

    pub fn all(&self) -> Vec<Review> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviews {
    async fn list_for_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<Review>, ReviewRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn create(&self, new: NewReview) -> Result<Review, ReviewRepositoryError> {
        let created = Review {
            id: Uuid::new_v4(),
            product_id: new.product_id,
            author: format!("user-{}", new.user_id),
            rating: new.rating,
            comment: new.comment,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            upvotes: 0,
            downvotes: 0,
        };
        self.insert(created.clone());
        Ok(created)
    }

    async fn vote(
        &self,
        review_id: Uuid,
        direction: VoteDirection,
    ) -> Result<Review, ReviewRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let review = rows
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or(ReviewRepositoryError::NotFound)?;
        match direction {
            VoteDirection::Up => review.upvotes += 1,
            VoteDirection::Down => review.downvotes += 1,
        }
        Ok(review.clone())
    }
}
