//! Discriminator dispatcher: lookup, picker entries and sub-form mounting.

use std::marker::PhantomData;

use serde::Serialize;

use certimate_provider::{UsageFilter, Variant, VariantDescriptor, catalog};

use super::variant_form::{SubFormInit, VariantForm};
use crate::traits::Localizer;

/// One entry of the provider picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOption<V> {
    pub provider: V,
    pub key: &'static str,
    /// Localized display label.
    pub label: String,
    pub icon: &'static str,
}

/// Maps discriminator values of `V` to descriptors and sub-forms.
///
/// Purely a lookup over the static catalog; holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher<V>(PhantomData<V>);

impl<V: Variant> Dispatcher<V> {
    pub fn new() -> Self {
        Self(PhantomData)
    }

    /// Descriptor of `key`, or `None` for an unknown discriminator.
    pub fn resolve(&self, key: &str) -> Option<VariantDescriptor<V>> {
        catalog::resolve::<V>(key).ok()
    }

    /// Selectable descriptors under `usage`, in catalog order.
    pub fn list_available(&self, usage: Option<UsageFilter>) -> Vec<VariantDescriptor<V>> {
        catalog::list_available::<V>(usage)
    }

    /// Picker entries with localized labels.
    ///
    /// A label key missing from the localizer falls back to the provider's
    /// English name.
    pub fn options(
        &self,
        usage: Option<UsageFilter>,
        localizer: &dyn Localizer,
    ) -> Vec<ProviderOption<V>> {
        self.list_available(usage)
            .into_iter()
            .map(|d| {
                let label = localizer.text(d.label_key);
                ProviderOption {
                    provider: d.provider,
                    key: d.provider.key(),
                    label: if label == d.label_key {
                        d.name.to_string()
                    } else {
                        label
                    },
                    icon: d.icon,
                }
            })
            .collect()
    }

    /// Mounts the sub-form of `descriptor`.
    pub fn mount(&self, descriptor: VariantDescriptor<V>, init: SubFormInit) -> VariantForm<V> {
        VariantForm::mount(descriptor, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{BuiltinLocalizer, Language};
    use certimate_provider::AccessProvider;

    #[test]
    fn every_key_resolves_to_its_own_descriptor() {
        let dispatcher = Dispatcher::<AccessProvider>::new();
        for provider in AccessProvider::all() {
            let descriptor = dispatcher.resolve(provider.key());
            assert_eq!(descriptor.map(|d| d.provider), Some(*provider));
        }
        assert!(dispatcher.resolve("").is_none());
        assert!(dispatcher.resolve("CLOUDFLARE").is_none());
    }

    #[test]
    fn options_follow_usage_and_language() {
        let dispatcher = Dispatcher::<AccessProvider>::new();
        let en = BuiltinLocalizer::new(Language::EnUs);
        let zh = BuiltinLocalizer::new(Language::ZhCn);

        let ca = dispatcher.options(Some(UsageFilter::Ca), &en);
        assert!(!ca.is_empty());
        assert!(ca.iter().all(|o| {
            o.provider
                .descriptor()
                .capabilities
                .contains(&certimate_provider::Capability::Ca)
        }));

        let en_aliyun = dispatcher
            .options(None, &en)
            .into_iter()
            .find(|o| o.key == "aliyun");
        let zh_aliyun = dispatcher
            .options(None, &zh)
            .into_iter()
            .find(|o| o.key == "aliyun");
        assert_eq!(en_aliyun.map(|o| o.label), Some("Alibaba Cloud".to_string()));
        assert_eq!(zh_aliyun.map(|o| o.label), Some("阿里云".to_string()));
    }

    #[cfg(feature = "all-kinds")]
    #[test]
    fn mount_uses_defaults() {
        use certimate_provider::NotifyProvider;

        let dispatcher = Dispatcher::<NotifyProvider>::new();
        let Some(descriptor) = dispatcher.resolve("email") else {
            panic!("email notify channel missing");
        };
        let form = dispatcher.mount(descriptor, SubFormInit::defaults());
        assert_eq!(form.provider(), NotifyProvider::Email);
    }
}
