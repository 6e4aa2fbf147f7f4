//! # Mock Database
//!
//! Utilities for testing store consumers in isolation.
//!
//! [`MockDatabase`] hands out a real [`DatabaseClient`] whose requests are
//! answered by a scripted expectation queue instead of a live engine, so
//! tests can assert the exact sequence of remote calls a component makes and
//! inject failures deterministically.

use crate::store::core::{DatabaseClient, DatabaseRequest, DocumentFields, StoreError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the response to return for it.
enum Expectation<F: DocumentFields> {
    List {
        collection: String,
        response: Result<Vec<(String, F)>, StoreError>,
    },
    Get {
        collection: String,
        key: String,
        response: Result<Option<F>, StoreError>,
    },
    Set {
        collection: String,
        key: String,
        response: Result<(), StoreError>,
    },
    Delete {
        collection: String,
        key: String,
        response: Result<(), StoreError>,
    },
}

/// A scripted database client for tests.
///
/// # Example
/// ```ignore
/// let mut mock = MockDatabase::<ItemFields>::new();
/// mock.expect_get("inventory", "Apple").return_ok(None);
/// mock.expect_set("inventory", "Apple").return_ok(());
///
/// let client = mock.client();
/// // drive the component under test...
/// mock.verify(); // all expectations consumed, in order
/// ```
pub struct MockDatabase<F: DocumentFields> {
    client: DatabaseClient<F>,
    expectations: Arc<Mutex<VecDeque<Expectation<F>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<F: DocumentFields> MockDatabase<F> {
    /// Creates a mock with an empty expectation queue.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<DatabaseRequest<F>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<F>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        DatabaseRequest::List {
                            collection,
                            respond_to,
                        },
                        Some(Expectation::List {
                            collection: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(collection, expected, "List hit unexpected collection");
                        let _ = respond_to.send(response);
                    }
                    (
                        DatabaseRequest::Get {
                            collection,
                            key,
                            respond_to,
                        },
                        Some(Expectation::Get {
                            collection: exp_col,
                            key: exp_key,
                            response,
                        }),
                    ) => {
                        assert_eq!((collection, key), (exp_col, exp_key), "Get mismatch");
                        let _ = respond_to.send(response);
                    }
                    (
                        DatabaseRequest::Set {
                            collection,
                            key,
                            respond_to,
                            ..
                        },
                        Some(Expectation::Set {
                            collection: exp_col,
                            key: exp_key,
                            response,
                        }),
                    ) => {
                        assert_eq!((collection, key), (exp_col, exp_key), "Set mismatch");
                        let _ = respond_to.send(response);
                    }
                    (
                        DatabaseRequest::Delete {
                            collection,
                            key,
                            respond_to,
                        },
                        Some(Expectation::Delete {
                            collection: exp_col,
                            key: exp_key,
                            response,
                        }),
                    ) => {
                        assert_eq!((collection, key), (exp_col, exp_key), "Delete mismatch");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: DatabaseClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the scripted client for use in tests.
    pub fn client(&self) -> DatabaseClient<F> {
        self.client.clone()
    }

    /// Expects a `list` call against `collection`.
    pub fn expect_list(&mut self, collection: &str) -> ListExpectationBuilder<F> {
        ListExpectationBuilder {
            collection: collection.to_string(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` call for `key`.
    pub fn expect_get(&mut self, collection: &str, key: &str) -> GetExpectationBuilder<F> {
        GetExpectationBuilder {
            collection: collection.to_string(),
            key: key.to_string(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `set` call for `key`.
    pub fn expect_set(&mut self, collection: &str, key: &str) -> WriteExpectationBuilder<F> {
        WriteExpectationBuilder {
            collection: collection.to_string(),
            key: key.to_string(),
            delete: false,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` call for `key`.
    pub fn expect_delete(&mut self, collection: &str, key: &str) -> WriteExpectationBuilder<F> {
        WriteExpectationBuilder {
            collection: collection.to_string(),
            key: key.to_string(),
            delete: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any scripted expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<F: DocumentFields> Default for MockDatabase<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<F: DocumentFields> {
    collection: String,
    expectations: Arc<Mutex<VecDeque<Expectation<F>>>>,
}

impl<F: DocumentFields> ListExpectationBuilder<F> {
    pub fn return_ok(self, docs: Vec<(String, F)>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                collection: self.collection,
                response: Ok(docs),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                collection: self.collection,
                response: Err(error),
            });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<F: DocumentFields> {
    collection: String,
    key: String,
    expectations: Arc<Mutex<VecDeque<Expectation<F>>>>,
}

impl<F: DocumentFields> GetExpectationBuilder<F> {
    pub fn return_ok(self, fields: Option<F>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                collection: self.collection,
                key: self.key,
                response: Ok(fields),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get {
                collection: self.collection,
                key: self.key,
                response: Err(error),
            });
    }
}

/// Builder for `set` and `delete` expectations.
pub struct WriteExpectationBuilder<F: DocumentFields> {
    collection: String,
    key: String,
    delete: bool,
    expectations: Arc<Mutex<VecDeque<Expectation<F>>>>,
}

impl<F: DocumentFields> WriteExpectationBuilder<F> {
    pub fn return_ok(self) {
        let exp = if self.delete {
            Expectation::Delete {
                collection: self.collection,
                key: self.key,
                response: Ok(()),
            }
        } else {
            Expectation::Set {
                collection: self.collection,
                key: self.key,
                response: Ok(()),
            }
        };
        self.expectations.lock().unwrap().push_back(exp);
    }

    pub fn return_err(self, error: StoreError) {
        let exp = if self.delete {
            Expectation::Delete {
                collection: self.collection,
                key: self.key,
                response: Err(error),
            }
        } else {
            Expectation::Set {
                collection: self.collection,
                key: self.key,
                response: Err(error),
            }
        };
        self.expectations.lock().unwrap().push_back(exp);
    }
}
