/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod base;
pub mod component;
pub mod department;
pub mod designation;
pub mod employee;
pub mod guard;
pub mod payroll;
pub mod policy;
