/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

//! Security provider registry
//!
//! Providers are resolved by identifier through a static factory instead of being
//! loaded from shared libraries, then installed into the process-wide
//! [`SecurityCatalog`].

mod catalog;
mod factory;
mod impls;
mod registry;
mod traits;

pub use traits::ProviderError;
pub use traits::SecurityProvider;

pub use catalog::SecurityCatalog;

pub use factory::create_provider;
pub use factory::register_factory;
pub use factory::ProviderConstructor;

pub use impls::OpenSslProvider;
pub use impls::SmProvider;

pub use registry::ProviderRegistry;
