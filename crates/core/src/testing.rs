//! In-memory book store used by the controller and reference tests

use crate::list::PAGE_SIZE;
use crate::model::{Book, CreateBook, UpdateBook};
use crate::resource::Resource;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FakeError(pub String);

#[derive(Default)]
pub struct FakeBooks {
    books: Mutex<Vec<Book>>,
    next_id: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    pub list_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

pub fn book(id: i64, name: &str) -> Book {
    Book {
        id_book: id,
        book_name: name.to_string(),
        total_page: "100".to_string(),
        publisher: "Gramedia".to_string(),
        author: "Anonim".to_string(),
        release_year: 2020,
        stock: 1,
        cover: None,
    }
}

pub fn new_book(name: &str) -> CreateBook {
    CreateBook {
        book_name: name.to_string(),
        total_page: "120".to_string(),
        publisher: "Mizan".to_string(),
        author: "Dee Lestari".to_string(),
        release_year: 2012,
        stock: 3,
        cover: None,
    }
}

impl FakeBooks {
    pub fn with_books(count: usize) -> Self {
        let books = (1..=count)
            .map(|i| book(i as i64, &format!("Book {i}")))
            .collect();
        Self {
            books: Mutex::new(books),
            next_id: AtomicUsize::new(count + 1),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.books.lock().unwrap().len()
    }

    fn check_writes(&self) -> Result<(), FakeError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FakeError("write rejected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Resource for FakeBooks {
    type Entity = Book;
    type Create = CreateBook;
    type Update = UpdateBook;
    type Error = FakeError;

    fn name(&self) -> &'static str {
        "book"
    }

    async fn list(&self, page: u32) -> Result<Vec<Book>, FakeError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(FakeError("service unavailable".to_string()));
        }
        let books = self.books.lock().unwrap();
        Ok(books
            .iter()
            .skip(page as usize * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Book>, FakeError> {
        Ok(self.books.lock().unwrap().iter().find(|b| b.id_book == id).cloned())
    }

    async fn create(&self, payload: &CreateBook) -> Result<Option<Book>, FakeError> {
        self.check_writes()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        let created = Book {
            id_book: id,
            book_name: payload.book_name.clone(),
            total_page: payload.total_page.clone(),
            publisher: payload.publisher.clone(),
            author: payload.author.clone(),
            release_year: payload.release_year,
            stock: payload.stock,
            cover: payload.cover.clone(),
        };
        self.books.lock().unwrap().push(created.clone());
        Ok(Some(created))
    }

    async fn update(&self, id: i64, payload: &UpdateBook) -> Result<Option<Book>, FakeError> {
        self.check_writes()?;
        let mut books = self.books.lock().unwrap();
        let Some(existing) = books.iter_mut().find(|b| b.id_book == id) else {
            return Err(FakeError("not found".to_string()));
        };
        if let Some(name) = &payload.book_name {
            existing.book_name = name.clone();
        }
        if let Some(stock) = payload.stock {
            existing.stock = stock;
        }
        if let Some(author) = &payload.author {
            existing.author = author.clone();
        }
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i64) -> Result<(), FakeError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writes()?;
        self.books.lock().unwrap().retain(|b| b.id_book != id);
        Ok(())
    }
}
