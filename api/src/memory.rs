//! In-memory implementation of [`TodoApi`].
//!
//! Mirrors the HTTP backend's observable behavior closely enough that tests
//! and demos can swap it in: sequential string ids, trimmed titles, blank
//! titles rejected on create, search matching titles only, newest-first
//! ordering. Clones share one store.

use crate::{
    TodoApi,
    error::{ApiError, Result},
    types::{ListQuery, NewTodo, Priority, Todo, TodoId, TodoPatch, TodoStats},
};
use chrono::Utc;
use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicBool, Ordering},
};

#[derive(Debug)]
struct Inner {
    rows: Vec<Todo>,
    next_id: u64,
}

/// Todo API backed by process memory.
#[derive(Debug, Clone)]
pub struct InMemoryTodoApi {
    inner: Arc<Mutex<Inner>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryTodoApi {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            })),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A store seeded with the given records.
    ///
    /// Id assignment continues after the highest numeric id in the seed.
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos
            .iter()
            .filter_map(|todo| todo.id.as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |highest| highest + 1);

        Self {
            inner: Arc::new(Mutex::new(Inner {
                rows: todos,
                next_id,
            })),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent call fail with a server error.
    ///
    /// Turns the store into a dead backend for rollback tests.
    pub fn fail_requests(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of the stored records, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the store lock is poisoned.
    pub fn todos(&self) -> Result<Vec<Todo>> {
        Ok(self.lock()?.rows.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| ApiError::Api {
            status: 500,
            message: "store lock poisoned".to_string(),
        })
    }

    fn check_failure(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Api {
                status: 500,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for InMemoryTodoApi {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoApi for InMemoryTodoApi {
    async fn list(&self, query: ListQuery) -> Result<Vec<Todo>> {
        self.check_failure()?;
        let inner = self.lock()?;

        let needle = query.search.as_ref().map(|s| s.to_lowercase());
        let mut rows: Vec<Todo> = inner
            .rows
            .iter()
            .filter(|todo| query.status.matches(todo.completed))
            .filter(|todo| query.priority.is_none_or(|p| todo.priority == p))
            .filter(|todo| {
                needle
                    .as_ref()
                    .is_none_or(|needle| todo.title.to_lowercase().contains(needle))
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo> {
        self.check_failure()?;

        let title = new_todo.title.trim();
        if title.is_empty() {
            return Err(ApiError::Validation {
                message: "Title is required".to_string(),
            });
        }

        let mut inner = self.lock()?;
        let id = TodoId::new(inner.next_id.to_string());
        inner.next_id += 1;

        let todo = Todo {
            id,
            title: title.to_string(),
            completed: false,
            created_at: Utc::now(),
            priority: new_todo.priority,
            due_date: new_todo.due_date,
            category: new_todo.category,
        };
        inner.rows.push(todo.clone());
        Ok(todo)
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> Result<Todo> {
        self.check_failure()?;
        let mut inner = self.lock()?;

        match inner.rows.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = completed;
                Ok(todo.clone())
            }
            None => Err(ApiError::NotFound { id }),
        }
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo> {
        self.check_failure()?;
        let mut inner = self.lock()?;

        let Some(todo) = inner.rows.iter_mut().find(|todo| todo.id == id) else {
            return Err(ApiError::NotFound { id });
        };

        if let Some(title) = patch.title {
            todo.title = title.trim().to_string();
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        if let Some(priority) = patch.priority {
            todo.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            todo.due_date = due_date;
        }
        if let Some(category) = patch.category {
            todo.category = category;
        }
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<()> {
        self.check_failure()?;
        let mut inner = self.lock()?;

        // Absent rows delete cleanly, same as the SQL backend's DELETE.
        inner.rows.retain(|todo| todo.id != id);
        Ok(())
    }

    async fn stats(&self) -> Result<TodoStats> {
        self.check_failure()?;
        let inner = self.lock()?;

        let total = inner.rows.len();
        let completed = inner.rows.iter().filter(|todo| todo.completed).count();
        let high_priority = inner
            .rows
            .iter()
            .filter(|todo| todo.priority == Priority::High && !todo.completed)
            .count();

        Ok(TodoStats {
            total,
            completed,
            pending: total - completed,
            high_priority,
        })
    }
}
