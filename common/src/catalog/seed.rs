//! 組み込み病害カタログ
//!
//! 起動時に一度だけ構築され、以後変更されない。

use crate::types::{DiseaseRecord, Severity};

fn record(
    key: &str,
    name: &str,
    plant: &str,
    severity: Severity,
    symptoms: &str,
    remedies: &[&str],
    prevention: &str,
) -> DiseaseRecord {
    DiseaseRecord {
        key: key.into(),
        name: name.into(),
        plant: plant.into(),
        severity,
        symptoms: symptoms.into(),
        remedies: remedies.iter().map(|r| r.to_string()).collect(),
        prevention: prevention.into(),
    }
}

/// 組み込みレコード（表示順）
pub(crate) fn builtin_records() -> Vec<DiseaseRecord> {
    vec![
        record(
            "tomato_late_blight",
            "Late Blight",
            "Tomato",
            Severity::High,
            "Dark, water-soaked spots on leaves and stems, white fuzzy growth on leaf undersides, rapid spread in humid conditions",
            &[
                "Remove affected parts immediately",
                "Apply copper fungicide every 7 days",
                "Improve ventilation",
                "Avoid overhead watering",
                "Use resistant varieties",
            ],
            "Ensure good drainage, practice crop rotation, monitor humidity levels",
        ),
        record(
            "tomato_early_blight",
            "Early Blight",
            "Tomato",
            Severity::Medium,
            "Concentric ring spots on lower leaves, yellowing and dropping of leaves, dark lesions on stems",
            &[
                "Remove infected leaves",
                "Apply chlorothalonil fungicide",
                "Mulch around plants",
                "Water at soil level",
                "Prune lower branches",
            ],
            "Good air circulation, avoid wetting leaves, regular fertilization",
        ),
        record(
            "tomato_bacterial_spot",
            "Bacterial Spot",
            "Tomato",
            Severity::Medium,
            "Small dark spots with yellow halos on leaves, spots on fruit, leaf drop",
            &[
                "Use copper-based bactericides",
                "Remove infected plant debris",
                "Avoid working with wet plants",
                "Use drip irrigation",
                "Plant certified disease-free seeds",
            ],
            "Hot water seed treatment, crop rotation, avoid overhead irrigation",
        ),
        record(
            "tomato_mosaic_virus",
            "Mosaic Virus",
            "Tomato",
            Severity::High,
            "Mottled yellow and green patterns on leaves, stunted growth, reduced fruit production",
            &[
                "Remove infected plants completely",
                "Control aphid vectors",
                "Disinfect tools between plants",
                "Use virus-free transplants",
                "No chemical cure available",
            ],
            "Use resistant varieties, control insect vectors, sanitary practices",
        ),
        record(
            "potato_late_blight",
            "Late Blight",
            "Potato",
            Severity::High,
            "Water-soaked lesions on leaves, white mold on undersides, rapid plant death in wet weather",
            &[
                "Apply preventive fungicides",
                "Hill soil around stems",
                "Harvest early if disease present",
                "Destroy crop residue",
                "Use certified seed potatoes",
            ],
            "Plant resistant varieties, ensure good drainage, monitor weather conditions",
        ),
        record(
            "potato_early_blight",
            "Early Blight",
            "Potato",
            Severity::Medium,
            "Brown spots with concentric rings on leaves, premature defoliation, tuber lesions",
            &[
                "Apply fungicide sprays regularly",
                "Remove plant debris",
                "Maintain adequate nutrition",
                "Ensure proper spacing",
                "Harvest tubers carefully",
            ],
            "Balanced fertilization, avoid plant stress, proper storage conditions",
        ),
        record(
            "corn_northern_leaf_blight",
            "Northern Leaf Blight",
            "Corn",
            Severity::Medium,
            "Gray-green elliptical lesions on leaves, lesions may have dark borders",
            &[
                "Apply fungicide if severe",
                "Use resistant hybrids",
                "Bury crop residue",
                "Rotate to non-host crops",
                "Maintain balanced nutrition",
            ],
            "Crop rotation, tillage practices, resistant varieties",
        ),
        record(
            "corn_common_rust",
            "Common Rust",
            "Corn",
            Severity::Medium,
            "Small, circular to elongate, golden to cinnamon-brown pustules on leaves",
            &[
                "Apply triazole fungicides",
                "Plant resistant varieties",
                "Monitor weather conditions",
                "Remove volunteer corn",
                "Time planting appropriately",
            ],
            "Use resistant hybrids, avoid late planting, monitor for early symptoms",
        ),
        record(
            "apple_scab",
            "Apple Scab",
            "Apple",
            Severity::Medium,
            "Olive-green to black spots on leaves and fruit, leaf curling, premature leaf drop",
            &[
                "Apply dormant oil in spring",
                "Use fungicide sprays",
                "Rake and destroy fallen leaves",
                "Prune for air circulation",
                "Choose resistant varieties",
            ],
            "Sanitation practices, resistant cultivars, preventive spraying",
        ),
        record(
            "apple_fire_blight",
            "Fire Blight",
            "Apple",
            Severity::High,
            "Blackened, burnt appearance of blossoms and shoots, cankers on branches",
            &[
                "Prune infected branches 12 inches below symptoms",
                "Apply copper bactericide",
                "Disinfect pruning tools",
                "Avoid high nitrogen fertilizer",
                "Remove infected trees if severe",
            ],
            "Plant resistant varieties, avoid excessive nitrogen, proper pruning practices",
        ),
        record(
            "rose_black_spot",
            "Black Spot",
            "Rose",
            Severity::Medium,
            "Black circular spots on leaves, yellowing leaves, premature defoliation",
            &[
                "Apply systemic fungicide",
                "Remove infected leaves",
                "Improve air circulation",
                "Water at soil level",
                "Apply organic mulch",
            ],
            "Choose resistant varieties, proper spacing, avoid overhead watering",
        ),
        record(
            "rose_powdery_mildew",
            "Powdery Mildew",
            "Rose",
            Severity::Medium,
            "White powdery coating on leaves and buds, leaf distortion, reduced flowering",
            &[
                "Apply sulfur-based fungicide",
                "Increase air circulation",
                "Remove affected parts",
                "Avoid overhead watering",
                "Use baking soda spray (mild cases)",
            ],
            "Proper spacing, morning sun exposure, resistant varieties",
        ),
        record(
            "wheat_leaf_rust",
            "Leaf Rust",
            "Wheat",
            Severity::Medium,
            "Small, circular, orange-red pustules on leaves, yellowing and drying of leaves",
            &[
                "Apply triazole fungicides",
                "Use resistant varieties",
                "Monitor weather conditions",
                "Remove volunteer wheat",
                "Time harvest appropriately",
            ],
            "Resistant cultivars, crop rotation, monitor weather patterns",
        ),
        record(
            "wheat_stripe_rust",
            "Stripe Rust",
            "Wheat",
            Severity::High,
            "Yellow stripes parallel to leaf veins, pustules arranged in rows",
            &[
                "Apply preventive fungicides",
                "Use resistant varieties",
                "Remove infected plant debris",
                "Monitor cool, wet conditions",
                "Adjust planting dates",
            ],
            "Plant resistant varieties, avoid late planting, field sanitation",
        ),
        record(
            "rice_blast",
            "Rice Blast",
            "Rice",
            Severity::High,
            "Diamond-shaped lesions with gray centers and reddish-brown borders on leaves",
            &[
                "Apply tricyclazole fungicide",
                "Manage nitrogen levels",
                "Improve field drainage",
                "Use resistant varieties",
                "Remove infected stubble",
            ],
            "Balanced fertilization, proper water management, resistant cultivars",
        ),
        record(
            "rice_bacterial_blight",
            "Bacterial Blight",
            "Rice",
            Severity::High,
            "Water-soaked to yellow stripes on leaves, wilting of leaves, stunted growth",
            &[
                "Use copper-based bactericides",
                "Plant resistant varieties",
                "Improve field sanitation",
                "Manage water levels",
                "Use certified clean seeds",
            ],
            "Resistant varieties, clean seed, proper water management",
        ),
        record(
            "grape_downy_mildew",
            "Downy Mildew",
            "Grape",
            Severity::High,
            "Yellow oil spots on upper leaf surface, white downy growth underneath, leaf drop",
            &[
                "Apply copper fungicides",
                "Improve canopy ventilation",
                "Remove infected leaves",
                "Reduce humidity around plants",
                "Use systemic fungicides",
            ],
            "Good air circulation, morning sun exposure, resistant varieties",
        ),
        record(
            "grape_powdery_mildew",
            "Powdery Mildew",
            "Grape",
            Severity::Medium,
            "White powdery growth on leaves and fruit, leaf curling, reduced grape quality",
            &[
                "Apply sulfur treatments",
                "Use horticultural oils",
                "Improve air circulation",
                "Remove affected parts",
                "Apply potassium bicarbonate",
            ],
            "Proper pruning, resistant varieties, avoid overhead irrigation",
        ),
        record(
            "citrus_canker",
            "Citrus Canker",
            "Citrus",
            Severity::High,
            "Raised, corky lesions on leaves, fruit, and twigs with yellow halos",
            &[
                "Apply copper bactericides",
                "Remove infected plant parts",
                "Disinfect pruning tools",
                "Improve drainage",
                "Use windbreaks to reduce spread",
            ],
            "Use certified disease-free plants, copper sprays, sanitation",
        ),
        record(
            "citrus_greening",
            "Citrus Greening (HLB)",
            "Citrus",
            Severity::Critical,
            "Yellow shoots, asymmetrical mottling on leaves, small bitter fruit, tree decline",
            &[
                "Remove infected trees immediately",
                "Control psyllid vectors",
                "Use systemic insecticides",
                "Plant certified clean trees",
                "No cure available - prevention only",
            ],
            "Vector control, certified nursery stock, early detection and removal",
        ),
        record(
            "pepper_bacterial_spot",
            "Bacterial Spot",
            "Pepper",
            Severity::Medium,
            "Small dark spots with yellow halos on leaves, fruit spots, defoliation",
            &[
                "Use copper bactericides",
                "Remove plant debris",
                "Avoid overhead watering",
                "Use certified seeds",
                "Rotate crops",
            ],
            "Hot water seed treatment, drip irrigation, crop rotation",
        ),
        record(
            "bean_angular_leaf_spot",
            "Angular Leaf Spot",
            "Bean",
            Severity::Medium,
            "Angular brown spots between leaf veins, yellow halos, defoliation",
            &[
                "Apply copper fungicides",
                "Use certified clean seeds",
                "Avoid working in wet fields",
                "Remove crop residue",
                "Rotate to non-host crops",
            ],
            "Clean seed, crop rotation, avoid moisture on leaves",
        ),
        record(
            "cucumber_downy_mildew",
            "Downy Mildew",
            "Cucumber",
            Severity::High,
            "Yellow angular spots on upper leaves, gray-purple growth on undersides",
            &[
                "Apply preventive fungicides",
                "Improve air circulation",
                "Reduce humidity",
                "Remove infected plants",
                "Use drip irrigation",
            ],
            "Resistant varieties, good ventilation, avoid wet conditions",
        ),
        record(
            "strawberry_leaf_spot",
            "Leaf Spot",
            "Strawberry",
            Severity::Medium,
            "Small circular spots with purple borders and gray centers on leaves",
            &[
                "Apply fungicide sprays",
                "Remove infected leaves",
                "Improve air circulation",
                "Avoid overhead watering",
                "Use certified plants",
            ],
            "Proper spacing, resistant varieties, drip irrigation",
        ),
        record(
            "soybean_rust",
            "Soybean Rust",
            "Soybean",
            Severity::High,
            "Small tan to reddish-brown lesions on leaves, premature defoliation",
            &[
                "Apply triazole fungicides",
                "Monitor weather conditions",
                "Scout fields regularly",
                "Use resistant varieties",
                "Time applications correctly",
            ],
            "Early detection, preventive fungicide applications, resistant cultivars",
        ),
        record(
            "cotton_verticillium_wilt",
            "Verticillium Wilt",
            "Cotton",
            Severity::High,
            "Yellowing and wilting of leaves, vascular discoloration, stunted growth",
            &[
                "No chemical cure available",
                "Use resistant varieties",
                "Soil solarization",
                "Crop rotation with non-hosts",
                "Maintain plant health",
            ],
            "Resistant varieties, soil management, avoid plant stress",
        ),
        record(
            "sunflower_rust",
            "Rust",
            "Sunflower",
            Severity::Medium,
            "Orange-yellow pustules on lower leaf surfaces, yellowing and premature defoliation",
            &[
                "Apply fungicide if severe",
                "Remove infected plant debris",
                "Use resistant hybrids",
                "Monitor environmental conditions",
                "Maintain field sanitation",
            ],
            "Resistant varieties, proper spacing, field sanitation",
        ),
        record(
            "lettuce_downy_mildew",
            "Downy Mildew",
            "Lettuce",
            Severity::Medium,
            "Yellow angular spots on upper leaves, white fluffy growth on undersides",
            &[
                "Apply preventive fungicides",
                "Improve air movement",
                "Reduce leaf wetness",
                "Use resistant varieties",
                "Harvest early if needed",
            ],
            "Good ventilation, avoid wet conditions, resistant cultivars",
        ),
        record(
            "cabbage_black_rot",
            "Black Rot",
            "Cabbage",
            Severity::High,
            "V-shaped yellow lesions from leaf edges, black veins, wilting",
            &[
                "Remove infected plants",
                "Apply copper bactericides",
                "Use certified seeds",
                "Crop rotation",
                "Improve drainage",
            ],
            "Hot water seed treatment, crop rotation, field sanitation",
        ),
        record(
            "carrot_leaf_blight",
            "Leaf Blight",
            "Carrot",
            Severity::Medium,
            "Brown lesions on leaves with yellow halos, defoliation, reduced root quality",
            &[
                "Apply fungicide sprays",
                "Remove infected foliage",
                "Improve air circulation",
                "Avoid overhead irrigation",
                "Harvest roots promptly",
            ],
            "Crop rotation, proper spacing, avoid wet conditions",
        ),
        record(
            "onion_purple_blotch",
            "Purple Blotch",
            "Onion",
            Severity::Medium,
            "Purple lesions on leaves and stalks, concentric rings in lesions",
            &[
                "Apply fungicide treatments",
                "Remove infected plant debris",
                "Improve air circulation",
                "Reduce humidity",
                "Use certified seeds",
            ],
            "Proper spacing, avoid high humidity, resistant varieties",
        ),
        record(
            "spinach_downy_mildew",
            "Downy Mildew",
            "Spinach",
            Severity::High,
            "Yellow spots on upper leaves, gray-purple growth on undersides, leaf curling",
            &[
                "Apply preventive fungicides",
                "Improve ventilation",
                "Remove infected plants",
                "Avoid wet conditions",
                "Use resistant varieties",
            ],
            "Resistant cultivars, good air flow, avoid leaf wetness",
        ),
        record(
            "healthy",
            "Healthy Plant",
            "Various",
            Severity::None,
            "Vibrant green color, no discoloration, strong structure, normal growth patterns",
            &[
                "Continue excellent care",
                "Maintain watering schedule",
                "Ensure adequate nutrition",
                "Monitor for early disease signs",
                "Keep up preventive measures",
            ],
            "Maintain current care practices, regular monitoring, proper nutrition",
        ),
    ]
}
