//! Fixed item archetypes behind the synthetic catalog.

use crate::domain::product::Category;

/// One named, described, imaged item a category template can produce.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ItemArchetype {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CategoryTemplate {
    pub category: Category,
    pub items: &'static [ItemArchetype],
}

pub(crate) const CATEGORY_TEMPLATES: &[CategoryTemplate] = &[
    CategoryTemplate {
        category: Category::Electronics,
        items: &[
            ItemArchetype {
                name: "Wireless Bluetooth Headphones",
                description: "Premium noise-canceling headphones with 30-hour battery life",
                image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Smart Fitness Watch",
                description: "Advanced fitness tracking with heart rate monitor and GPS",
                image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Portable Bluetooth Speaker",
                description: "Waterproof speaker with 360-degree sound and LED lights",
                image: "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Wireless Charging Pad",
                description: "Fast wireless charging for all Qi-enabled devices",
                image: "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Smart Home Assistant",
                description: "Voice-controlled smart speaker with AI assistant",
                image: "https://images.unsplash.com/photo-1543512214-318c7553f230?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Gaming Mechanical Keyboard",
                description: "RGB backlit mechanical keyboard for gaming enthusiasts",
                image: "https://images.unsplash.com/photo-1541140532154-b024d705b90a?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "4K Action Camera",
                description: "Ultra HD action camera with image stabilization",
                image: "https://images.unsplash.com/photo-1502920917128-1aa500764cbd?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Tablet with Stylus",
                description: "High-resolution tablet perfect for digital art and productivity",
                image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400&h=400&fit=crop",
            },
        ],
    },
    CategoryTemplate {
        category: Category::HomeGarden,
        items: &[
            ItemArchetype {
                name: "Essential Oil Diffuser",
                description: "Ultrasonic aromatherapy diffuser with LED mood lighting",
                image: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Smart Plant Pot",
                description: "Self-watering planter with app connectivity",
                image: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Cozy Throw Blanket",
                description: "Ultra-soft weighted blanket for relaxation and comfort",
                image: "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Decorative Wall Art",
                description: "Modern abstract canvas print for home decoration",
                image: "https://images.unsplash.com/photo-1513475382585-d06e58bcb0e0?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Ceramic Coffee Mug Set",
                description: "Handcrafted ceramic mugs with unique glazed finish",
                image: "https://images.unsplash.com/photo-1514228742587-6b1558fcf93a?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "LED String Lights",
                description: "Warm white fairy lights perfect for ambiance",
                image: "https://images.unsplash.com/photo-1513475382585-d06e58bcb0e0?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Succulent Garden Kit",
                description: "Complete kit with succulents, pots, and care instructions",
                image: "https://images.unsplash.com/photo-1459411621453-7b03977f4bfc?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Bamboo Kitchen Utensil Set",
                description: "Eco-friendly bamboo cooking utensils with holder",
                image: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=400&h=400&fit=crop",
            },
        ],
    },
    CategoryTemplate {
        category: Category::Fashion,
        items: &[
            ItemArchetype {
                name: "Luxury Silk Scarf",
                description: "Premium silk scarf with elegant pattern design",
                image: "https://images.unsplash.com/photo-1601924994987-69e26d50dc26?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Leather Crossbody Bag",
                description: "Genuine leather bag with adjustable strap",
                image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Designer Sunglasses",
                description: "UV protection sunglasses with polarized lenses",
                image: "https://images.unsplash.com/photo-1511499767150-a48a237f0083?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Cashmere Sweater",
                description: "Soft cashmere pullover in classic colors",
                image: "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Minimalist Watch",
                description: "Elegant timepiece with leather strap",
                image: "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Cozy Knit Beanie",
                description: "Warm winter hat in soft merino wool",
                image: "https://images.unsplash.com/photo-1521369909029-2afed882baee?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Athletic Running Shoes",
                description: "Lightweight running shoes with cushioned sole",
                image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Silk Pajama Set",
                description: "Luxurious silk sleepwear for ultimate comfort",
                image: "https://images.unsplash.com/photo-1571781926291-c477ebfd024b?w=400&h=400&fit=crop",
            },
        ],
    },
    CategoryTemplate {
        category: Category::Books,
        items: &[
            ItemArchetype {
                name: "Bestselling Novel Collection",
                description: "Set of award-winning contemporary fiction books",
                image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Coffee Table Art Book",
                description: "Beautiful photography book perfect for display",
                image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Personal Development Guide",
                description: "Inspiring self-help book for personal growth",
                image: "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Cookbook Collection",
                description: "Gourmet recipes from world-renowned chefs",
                image: "https://images.unsplash.com/photo-1589829085413-56de8ae18c73?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Travel Photography Book",
                description: "Stunning landscapes from around the world",
                image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Mindfulness Journal",
                description: "Guided journal for meditation and reflection",
                image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Classic Literature Set",
                description: "Timeless classics in beautiful hardcover editions",
                image: "https://images.unsplash.com/photo-1495446815901-a7297e633e8d?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Science Fiction Anthology",
                description: "Collection of award-winning sci-fi short stories",
                image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
            },
        ],
    },
    CategoryTemplate {
        category: Category::Toys,
        items: &[
            ItemArchetype {
                name: "Educational Building Blocks",
                description: "STEM learning toy for creative construction",
                image: "https://images.unsplash.com/photo-1558877385-09c4d8b7b7a9?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Art Supply Kit",
                description: "Complete set with paints, brushes, and canvas",
                image: "https://images.unsplash.com/photo-1513475382585-d06e58bcb0e0?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Remote Control Drone",
                description: "Beginner-friendly drone with HD camera",
                image: "https://images.unsplash.com/photo-1473968512647-3e447244af8f?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Puzzle Game Set",
                description: "Challenging jigsaw puzzles for all ages",
                image: "https://images.unsplash.com/photo-1606092195730-5d7b9af1efc5?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Musical Instrument Toy",
                description: "Child-friendly keyboard with learning modes",
                image: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Science Experiment Kit",
                description: "Safe and fun chemistry set for young scientists",
                image: "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Plush Stuffed Animal",
                description: "Soft and cuddly teddy bear made from organic cotton",
                image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Board Game Collection",
                description: "Family-friendly games for hours of entertainment",
                image: "https://images.unsplash.com/photo-1606092195730-5d7b9af1efc5?w=400&h=400&fit=crop",
            },
        ],
    },
    CategoryTemplate {
        category: Category::Sports,
        items: &[
            ItemArchetype {
                name: "Yoga Mat Set",
                description: "Non-slip yoga mat with carrying strap and blocks",
                image: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Resistance Band Kit",
                description: "Complete workout bands with door anchor",
                image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Water Bottle with Infuser",
                description: "Insulated bottle with fruit infusion chamber",
                image: "https://images.unsplash.com/photo-1523362628745-0c100150b504?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Foam Roller",
                description: "Muscle recovery tool for post-workout relief",
                image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Adjustable Dumbbells",
                description: "Space-saving weights with quick adjustment",
                image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Running Belt",
                description: "Lightweight belt for phone and essentials",
                image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Tennis Racket",
                description: "Professional-grade racket for all skill levels",
                image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Cycling Helmet",
                description: "Lightweight safety helmet with ventilation",
                image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=400&fit=crop",
            },
        ],
    },
    CategoryTemplate {
        category: Category::Beauty,
        items: &[
            ItemArchetype {
                name: "Skincare Gift Set",
                description: "Complete routine with cleanser, serum, and moisturizer",
                image: "https://images.unsplash.com/photo-1556228578-0d85b1a4d571?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Makeup Brush Collection",
                description: "Professional brushes for flawless application",
                image: "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Aromatherapy Bath Bombs",
                description: "Relaxing bath bombs with essential oils",
                image: "https://images.unsplash.com/photo-1571781926291-c477ebfd024b?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Hair Styling Tool",
                description: "Professional hair dryer with multiple attachments",
                image: "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Nail Care Kit",
                description: "Complete manicure set with tools and polish",
                image: "https://images.unsplash.com/photo-1556228578-0d85b1a4d571?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Face Mask Collection",
                description: "Variety pack of hydrating and purifying masks",
                image: "https://images.unsplash.com/photo-1556228578-0d85b1a4d571?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "Perfume Gift Set",
                description: "Elegant fragrance collection in travel sizes",
                image: "https://images.unsplash.com/photo-1541643600914-78b084683601?w=400&h=400&fit=crop",
            },
            ItemArchetype {
                name: "LED Makeup Mirror",
                description: "Illuminated mirror with adjustable brightness",
                image: "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?w=400&h=400&fit=crop",
            },
        ],
    },
];
