//! Order book error types

use std::fmt;

use super::types::{OrderId, Price, Quantity};

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OrderBookError {
    /// Order quantity was not strictly positive.
    InvalidQuantity {
        /// The quantity that was rejected.
        quantity: Quantity,
    },

    /// Order price was not strictly positive.
    InvalidPrice {
        /// The price that was rejected.
        price: Price,
    },

    /// Cancel (or query) referenced an order-id that is not live.
    OrderNotFound {
        /// The order-id that could not be found.
        order_id: OrderId,
    },

    /// Error while serializing a snapshot.
    SerializationError {
        /// Underlying error message.
        message: String,
    },

    /// Error while deserializing a snapshot.
    DeserializationError {
        /// Underlying error message.
        message: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidQuantity { quantity } => {
                write!(f, "invalid quantity: {quantity} is not strictly positive")
            }
            OrderBookError::InvalidPrice { price } => {
                write!(f, "invalid price: {price} is not strictly positive")
            }
            OrderBookError::OrderNotFound { order_id } => {
                write!(f, "order not found: {order_id}")
            }
            OrderBookError::SerializationError { message } => {
                write!(f, "serialization error: {message}")
            }
            OrderBookError::DeserializationError { message } => {
                write!(f, "deserialization error: {message}")
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
