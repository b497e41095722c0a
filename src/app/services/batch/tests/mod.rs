//! Tests for batch orchestration
