//! Property-based tests for slot matching and pass validity.
//!
//! Properties under test:
//! 1. A zero extent in a slot accepts any resource extent along that axis.
//! 2. Binding an undeclared input name fails and leaves the table unchanged.
//! 3. Binding every required slot makes a pass valid, whichever optional
//!    slots are also bound.
//! 4. Leaving any single required slot unbound makes a pass invalid, whatever
//!    the state of the other slots.

use std::sync::Arc;

use myth_pass::{
    BindingSettings, GpuResource, PassCore, PassIoDeclaration, RenderPass, ResourceDesc,
    SlotDescriptor, SlotDirection,
};
use proptest::prelude::*;
use wgpu::TextureFormat;

const FORMATS: [TextureFormat; 4] = [
    TextureFormat::Rgba8Unorm,
    TextureFormat::Rgba16Float,
    TextureFormat::R8Unorm,
    TextureFormat::Depth32Float,
];

struct DeclaredPass {
    core: PassCore,
    decl: PassIoDeclaration,
}

impl RenderPass for DeclaredPass {
    fn core(&self) -> &PassCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PassCore {
        &mut self.core
    }

    fn io_declaration(&self) -> PassIoDeclaration {
        self.decl.clone()
    }
}

/// (format index, required) per slot.
fn arb_slots() -> impl Strategy<Value = Vec<(usize, bool)>> {
    proptest::collection::vec((0..FORMATS.len(), any::<bool>()), 1..6)
}

fn build_pass(inputs: &[(usize, bool)], outputs: &[(usize, bool)]) -> DeclaredPass {
    let mut decl = PassIoDeclaration::new();
    for (i, &(fmt, required)) in inputs.iter().enumerate() {
        let mut slot = SlotDescriptor::texture(format!("in{i}")).format(FORMATS[fmt]);
        slot.required = required;
        decl.inputs.push(slot);
    }
    for (i, &(fmt, required)) in outputs.iter().enumerate() {
        let mut slot = SlotDescriptor::texture(format!("out{i}")).format(FORMATS[fmt]);
        slot.required = required;
        decl.outputs.push(slot);
    }
    DeclaredPass {
        core: PassCore::new("Declared"),
        decl,
    }
}

fn conforming(slot: &SlotDescriptor) -> Arc<GpuResource> {
    let format = slot.format.unwrap_or(TextureFormat::Rgba8Unorm);
    GpuResource::new(slot.name.clone(), ResourceDesc::texture_2d(64, 64, format))
}

/// Binds every required slot except `skip`, plus each optional slot whose
/// bit (counting inputs then outputs) is set in `optional_mask`.
fn bind_slots(pass: &mut DeclaredPass, skip: Option<&str>, optional_mask: u64) {
    let decl = pass.io_declaration();
    let slots = decl
        .inputs
        .iter()
        .map(|s| (true, s))
        .chain(decl.outputs.iter().map(|s| (false, s)));
    for (i, (is_input, slot)) in slots.enumerate() {
        let wanted = if slot.required {
            skip != Some(slot.name.as_str())
        } else {
            optional_mask & (1 << i) != 0
        };
        if !wanted {
            continue;
        }
        let bound = if is_input {
            pass.bind_input(&slot.name, &conforming(slot))
        } else {
            pass.bind_output(&slot.name, &conforming(slot))
        };
        assert!(bound);
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..Default::default() })]

    /// Property: zero extents are wildcards.
    #[test]
    fn zero_extent_is_wildcard(
        w in 1u32..16_384,
        h in 1u32..16_384,
        d in 1u32..2_048,
        fixed_w in any::<bool>(),
    ) {
        let settings = BindingSettings::default();
        let slot = SlotDescriptor::new("volume", myth_pass::ResourceKind::Texture(wgpu::TextureDimension::D3))
            .size(if fixed_w { w } else { 0 }, 0);
        let desc = ResourceDesc::texture_3d(w, h, d, TextureFormat::R8Unorm);
        prop_assert!(slot.accepts(&desc, &settings));
    }

    /// Property: undeclared names never bind.
    #[test]
    fn undeclared_input_is_rejected(inputs in arb_slots(), outputs in arb_slots(), suffix in "[a-z]{1,8}") {
        let mut pass = build_pass(&inputs, &outputs);
        let tex = GpuResource::new("tex", ResourceDesc::texture_2d(8, 8, TextureFormat::Rgba8Unorm));
        let before = pass.core().binding_count(SlotDirection::Input);

        let name = format!("missing_{suffix}");
        prop_assert!(!pass.bind_input(&name, &tex));
        prop_assert_eq!(pass.core().binding_count(SlotDirection::Input), before);
        prop_assert!(pass.input(&name).is_none());
    }

    /// Property: all required slots bound => valid.
    #[test]
    fn required_slots_bound_is_valid(
        inputs in arb_slots(),
        outputs in arb_slots(),
        optional_mask in any::<u64>(),
    ) {
        let mut pass = build_pass(&inputs, &outputs);
        bind_slots(&mut pass, None, optional_mask);
        prop_assert!(pass.is_valid());
    }

    /// Property: any single required slot unbound => invalid.
    #[test]
    fn single_unbound_required_is_invalid(
        inputs in arb_slots(),
        outputs in arb_slots(),
        pick in any::<prop::sample::Index>(),
        optional_mask in any::<u64>(),
    ) {
        let mut pass = build_pass(&inputs, &outputs);
        let decl = pass.io_declaration();
        let required: Vec<String> = decl
            .inputs
            .iter()
            .chain(decl.outputs.iter())
            .filter(|s| s.required)
            .map(|s| s.name.clone())
            .collect();
        prop_assume!(!required.is_empty());

        let skipped = &required[pick.index(required.len())];
        bind_slots(&mut pass, Some(skipped), optional_mask);
        prop_assert!(!pass.is_valid());
    }
}
