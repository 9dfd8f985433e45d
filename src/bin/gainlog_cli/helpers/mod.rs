// ABOUTME: Re-exports helper modules for the gainlog CLI
// ABOUTME: Provides access to display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

pub mod display;
