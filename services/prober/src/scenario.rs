//! The fixed set of pagination scenarios

/// One GET request and the statuses that count as a pass
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: &'static str,
    pub description: &'static str,
    pub path: String,
    /// Ordered query pairs; `sort` may appear more than once
    pub query: Vec<(String, String)>,
    pub expected: Vec<u16>,
}

impl Scenario {
    fn new(id: &'static str, description: &'static str, path: impl Into<String>) -> Self {
        Self {
            id,
            description,
            path: path.into(),
            query: Vec::new(),
            expected: vec![200],
        }
    }

    fn param(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    fn expect(mut self, statuses: &[u16]) -> Self {
        self.expected = statuses.to_vec();
        self
    }

    /// Path plus query string as it would appear in a URL
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self.query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

/// The eight product listing scenarios; `user_id` feeds the per-user one
pub fn default_scenarios(user_id: i64) -> Vec<Scenario> {
    vec![
        Scenario::new("1", "Basic pagination", "/products")
            .param("page", "0")
            .param("size", "5"),
        Scenario::new("2", "Pagination with sorting (price desc)", "/products")
            .param("page", "1")
            .param("size", "10")
            .param("sort", "price,desc"),
        Scenario::new(
            "3",
            "Multiple sort (category asc, price desc)",
            "/products",
        )
        .param("page", "0")
        .param("size", "5")
        .param("sort", "categories.name,asc")
        .param("sort", "price,desc"),
        Scenario::new("4", "Slice for performance", "/products/slice")
            .param("page", "0")
            .param("size", "10")
            .param("sort", "createdAt,desc"),
        Scenario::new("5", "Search with filters and pagination", "/products/search")
            .param("name", "gaming")
            .param("minPrice", "500")
            .param("page", "0")
            .param("size", "3"),
        Scenario::new(
            "6",
            "Products by user with pagination",
            format!("/products/user/{user_id}"),
        )
        .param("page", "0")
        .param("size", "5")
        .param("sort", "name,asc"),
        Scenario::new("7.1", "Validation error (page=-1, size=0)", "/products")
            .param("page", "-1")
            .param("size", "0")
            .expect(&[400]),
        Scenario::new("7.2", "Invalid sort field", "/products")
            .param("sort", "invalidField,asc")
            .expect(&[400]),
    ]
}
