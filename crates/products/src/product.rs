use catalog_core::ValueObject;

/// Product with the properties **maker** and **price**.
///
/// `maker` is only reachable through [`Product::maker`] and
/// [`Product::set_maker`]; `price` is a public field with no restrictions.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Manufacturer name.
    maker: String,
    /// Unit price. Any value is accepted, including negative and zero.
    pub price: f64,
}

impl Product {
    /// Create a new [`Product`] with an empty maker and a zero price.
    ///
    /// ```
    /// use catalog_products::Product;
    ///
    /// let product = Product::new();
    /// assert_eq!(product.maker(), "");
    /// assert_eq!(product.price, 0.0);
    /// ```
    pub fn new() -> Self {
        let mut product = Self {
            maker: String::new(),
            price: 0.0,
        };
        product.set_maker("");
        product
    }

    /// Current manufacturer name.
    pub fn maker(&self) -> &str {
        &self.maker
    }

    /// Replace the manufacturer name. Any text is accepted, including empty.
    pub fn set_maker(&mut self, maker: impl Into<String>) {
        self.maker = maker.into();
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for Product {}
